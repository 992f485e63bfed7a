//! Fields sampled on structured grids
use crate::types::ConvergenceError;
use itertools::iproduct;
use rlst::{rlst_dynamic_array, DynArray};
use std::fmt::{Debug, Formatter};

/// A scalar field with one value per grid cell
pub struct Field {
    values: DynArray<f64, 3>,
}

impl Debug for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_struct("Field")
            .field("shape", &self.shape())
            .finish()
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        let mut values = rlst_dynamic_array!(f64, self.shape());
        values
            .data_mut()
            .unwrap()
            .copy_from_slice(self.values.data().unwrap());
        Self { values }
    }
}

impl Field {
    /// Create a field filled with zeros
    pub fn zeros(shape: [usize; 3]) -> Self {
        Self {
            values: rlst_dynamic_array!(f64, shape),
        }
    }

    /// Create a field by evaluating a function of the cell index `[i, j, k]`
    pub fn from_fn(shape: [usize; 3], mut f: impl FnMut([usize; 3]) -> f64) -> Self {
        let mut field = Self::zeros(shape);
        for (i, j, k) in iproduct!(0..shape[0], 0..shape[1], 0..shape[2]) {
            *field.values.get_mut([i, j, k]).unwrap() = f([i, j, k]);
        }
        field
    }

    /// Create a field from values listed with the first axis varying slowest
    ///
    /// This is the layout simulation output usually arrives in: entry `(i * ny + j) * nz + k`
    /// of `values` is the value of cell `[i, j, k]`.
    pub fn from_values(shape: [usize; 3], values: &[f64]) -> Result<Self, ConvergenceError> {
        let npts = shape.iter().product::<usize>();
        if values.len() != npts {
            return Err(ConvergenceError::ShapeMismatch {
                expected: shape,
                found: [values.len(), 1, 1],
            });
        }
        Ok(Self::from_fn(shape, |[i, j, k]| {
            values[(i * shape[1] + j) * shape[2] + k]
        }))
    }

    /// Number of cells along each axis
    pub fn shape(&self) -> [usize; 3] {
        self.values.shape()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Is the field empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a cell
    pub fn get(&self, index: [usize; 3]) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Set the value at a cell
    ///
    /// Returns `None` without changing the field if the index is out of range.
    pub fn set(&mut self, index: [usize; 3], value: f64) -> Option<()> {
        *self.values.get_mut(index)? = value;
        Some(())
    }

    /// Values in storage order
    ///
    /// Two fields with the same shape share a storage order, so these slices can be compared
    /// entry by entry.
    pub fn values(&self) -> &[f64] {
        self.values.data().unwrap()
    }

    /// Values with the first axis varying slowest
    pub fn to_natural_order(&self) -> Vec<f64> {
        let shape = self.shape();
        iproduct!(0..shape[0], 0..shape[1], 0..shape[2])
            .map(|(i, j, k)| *self.values.get([i, j, k]).unwrap())
            .collect()
    }
}
