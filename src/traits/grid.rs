//! Structured grid geometry

/// A logically Cartesian grid with uniform spacing along each axis
pub trait Grid {
    /// Number of cells along each axis
    fn shape(&self) -> [usize; 3];

    /// Cell spacing along each axis
    fn spacing(&self) -> [f64; 3];

    /// Total number of cells
    fn cell_count(&self) -> usize {
        self.shape().iter().product()
    }

    /// Physical extent of the domain along each axis
    fn extent(&self) -> [f64; 3] {
        let shape = self.shape();
        let spacing = self.spacing();
        [0, 1, 2].map(|axis| shape[axis] as f64 * spacing[axis])
    }

    /// Coordinates of the cells along one axis
    ///
    /// Cell `i` sits at `spacing * i`: the first cell is at the origin, not at a cell centre.
    fn coordinates(&self, axis: usize) -> Vec<f64> {
        let d = self.spacing()[axis];
        (0..self.shape()[axis]).map(|i| d * i as f64).collect()
    }
}
