//! Convergence tables
mod aggregate;
mod curve;
mod table;

pub use aggregate::aggregate;
pub use curve::ConvergenceCurve;
pub use table::{ConvergenceEntry, ConvergenceTable};
