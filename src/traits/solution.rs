//! Exact solutions
use crate::{field::Field, traits::Grid};

/// An analytically known solution that can be sampled on a grid
pub trait ExactSolution {
    /// Value of the solution at a point and time
    fn value(&self, point: [f64; 3], time: f64) -> f64;

    /// Evaluate the solution at every cell of a grid
    ///
    /// The entry `[i, j, k]` of the output holds the value at `(x_i, y_j, z_k)`, using the
    /// coordinates given by [Grid::coordinates].
    fn evaluate(&self, grid: &impl Grid, time: f64) -> Field {
        let [x, y, z] = [0, 1, 2].map(|axis| grid.coordinates(axis));
        log::trace!("Evaluating exact solution on a {:?} grid", grid.shape());
        Field::from_fn(grid.shape(), |[i, j, k]| self.value([x[i], y[j], z[k]], time))
    }
}
