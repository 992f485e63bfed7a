//! Traits

mod grid;
#[cfg(feature = "serde")]
mod io;
mod solution;

pub use grid::Grid;
#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use solution::ExactSolution;
