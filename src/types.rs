//! Types

mod error;
pub use error::ConvergenceError;

use crate::{field::Field, grid::StructuredGrid};
use std::collections::BTreeMap;

/// Resolution key distinguishing the grids of one sweep
///
/// This is typically the number of cells along one axis.
pub type Resolution = usize;

/// Grid geometry for each resolution of a sweep
pub type GeoData = BTreeMap<Resolution, StructuredGrid>;

/// Numerical fields, keyed by configuration option and then by resolution
pub type FieldData = BTreeMap<String, BTreeMap<Resolution, Field>>;
