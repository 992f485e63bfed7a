//! Errors

use thiserror::Error;

/// Error raised while computing convergence data
#[derive(Error, Debug)]
pub enum ConvergenceError {
    /// The numerical and exact fields have different shapes
    #[error("field shape {found:?} does not match expected shape {expected:?}")]
    ShapeMismatch {
        /// Shape of the reference field
        expected: [usize; 3],
        /// Shape of the offending field
        found: [usize; 3],
    },
    /// A field was supplied for a resolution that has no grid
    #[error("no grid for resolution {0}")]
    MissingGridForResolution(usize),
    /// Non-positive order, resolution or error passed to the reference line generator
    #[error("invalid reference order parameters: {0}")]
    InvalidOrderParameters(String),
    /// Grid with non-positive cell counts or spacings, or an inconsistent sweep
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    /// Reading or writing a file failed
    #[cfg(feature = "serde")]
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Serialising to RON failed
    #[cfg(feature = "serde")]
    #[error("failed to write RON: {0}")]
    Ron(#[from] ron::Error),
    /// Parsing RON failed
    #[cfg(feature = "serde")]
    #[error("failed to parse RON: {0}")]
    RonParse(#[from] ron::error::SpannedError),
}
