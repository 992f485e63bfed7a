//! Manufactured solutions
use crate::traits::ExactSolution;

/// Time at which the manufactured solution is compared to simulation output
pub const EVALUATION_TIME: f64 = 1.0;

/// Manufactured solutions with a known closed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManufacturedSolution {
    /// `(2 + sin(x) sin(t)) (2 + sin(y) sin(t)) (2 + sin(z) sin(t))`
    #[default]
    SineProduct,
}

impl ManufacturedSolution {
    /// Name of the solution
    pub fn name(&self) -> &'static str {
        match self {
            Self::SineProduct => "sine product",
        }
    }
}

impl ExactSolution for ManufacturedSolution {
    fn value(&self, point: [f64; 3], time: f64) -> f64 {
        match self {
            Self::SineProduct => {
                let st = time.sin();
                point.iter().map(|x| 2.0 + x.sin() * st).product()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{grid::StructuredGrid, traits::Grid};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_origin_value() {
        let g = StructuredGrid::new([3, 4, 5], [0.3, 0.2, 0.1]).unwrap();
        for t in [0.0, 0.5, EVALUATION_TIME, 7.0] {
            let f = ManufacturedSolution::SineProduct.evaluate(&g, t);
            assert_eq!(f.get([0, 0, 0]).unwrap(), 8.0);
        }
    }

    #[test]
    fn test_shape() {
        let g = StructuredGrid::new([3, 4, 5], [0.3, 0.2, 0.1]).unwrap();
        let f = ManufacturedSolution::SineProduct.evaluate(&g, EVALUATION_TIME);
        assert_eq!(f.shape(), [3, 4, 5]);
        assert_eq!(f.len(), g.cell_count());
    }

    #[test]
    fn test_single_cell_axes() {
        let g = StructuredGrid::new([1, 1, 6], [0.4, 0.4, 0.4]).unwrap();
        let f = ManufacturedSolution::SineProduct.evaluate(&g, EVALUATION_TIME);
        let s = EVALUATION_TIME.sin();
        for k in 0..6 {
            let z = 0.4 * k as f64;
            assert_relative_eq!(
                f.get([0, 0, k]).unwrap(),
                4.0 * (2.0 + z.sin() * s),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_axis_ordering() {
        // Only the first axis spans a non-zero range of sin(x), so values must vary along i only
        let g = StructuredGrid::new([4, 3, 2], [0.5 * PI, 2.0 * PI, 2.0 * PI]).unwrap();
        let f = ManufacturedSolution::SineProduct.evaluate(&g, EVALUATION_TIME);
        let s = EVALUATION_TIME.sin();
        for i in 0..4 {
            let expected = (2.0 + (0.5 * PI * i as f64).sin() * s) * 4.0;
            for j in 0..3 {
                for k in 0..2 {
                    assert_relative_eq!(f.get([i, j, k]).unwrap(), expected, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_zero_time() {
        let g = StructuredGrid::cube(5, 1.0).unwrap();
        let f = ManufacturedSolution::SineProduct.evaluate(&g, 0.0);
        for v in f.values() {
            assert_eq!(*v, 8.0);
        }
    }
}
