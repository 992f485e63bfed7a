//! Structured grids
use crate::{
    traits::Grid,
    types::{ConvergenceError, GeoData},
};

/// A uniform structured grid with cell counts and spacings along three axes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuredGrid {
    shape: [usize; 3],
    spacing: [f64; 3],
}

impl StructuredGrid {
    /// Create a grid
    ///
    /// Every cell count must be positive and every spacing finite and positive.
    pub fn new(shape: [usize; 3], spacing: [f64; 3]) -> Result<Self, ConvergenceError> {
        if shape.contains(&0) {
            return Err(ConvergenceError::InvalidGrid(format!(
                "cell counts must be positive, got {shape:?}"
            )));
        }
        if spacing.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(ConvergenceError::InvalidGrid(format!(
                "spacings must be finite and positive, got {spacing:?}"
            )));
        }
        Ok(Self { shape, spacing })
    }

    /// Create a grid with `n` cells along each side of a cube with side length `extent`
    pub fn cube(n: usize, extent: f64) -> Result<Self, ConvergenceError> {
        Self::new([n; 3], [extent / n as f64; 3])
    }

    /// Number of cells along the first axis
    pub fn nx(&self) -> usize {
        self.shape[0]
    }
    /// Number of cells along the second axis
    pub fn ny(&self) -> usize {
        self.shape[1]
    }
    /// Number of cells along the third axis
    pub fn nz(&self) -> usize {
        self.shape[2]
    }
    /// Spacing along the first axis
    pub fn di(&self) -> f64 {
        self.spacing[0]
    }
    /// Spacing along the second axis
    pub fn dj(&self) -> f64 {
        self.spacing[1]
    }
    /// Spacing along the third axis
    pub fn dk(&self) -> f64 {
        self.spacing[2]
    }
}

impl Grid for StructuredGrid {
    fn shape(&self) -> [usize; 3] {
        self.shape
    }
    fn spacing(&self) -> [f64; 3] {
        self.spacing
    }
}

/// Check that every grid of a sweep covers the same physical domain
///
/// Extents are compared relative to the extent of the coarsest grid with tolerance `rtol`.
pub fn check_domain_extent(geo_data: &GeoData, rtol: f64) -> Result<(), ConvergenceError> {
    let Some((&n0, g0)) = geo_data.iter().next() else {
        return Ok(());
    };
    let e0 = g0.extent();
    for (n, g) in geo_data.iter().skip(1) {
        let e = g.extent();
        for axis in 0..3 {
            if (e[axis] - e0[axis]).abs() > rtol * e0[axis] {
                return Err(ConvergenceError::InvalidGrid(format!(
                    "extent {e:?} at resolution {n} differs from extent {e0:?} at resolution {n0}"
                )));
            }
        }
    }
    Ok(())
}
