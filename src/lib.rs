//! Convergence verification against manufactured solutions
//!
//! Simulation output at several grid resolutions is compared with an analytically known
//! solution. The error norms at each resolution are collected in a [ConvergenceTable], from
//! which measured convergence curves can be drawn next to [ReferenceLine]s of idealised order.
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod analysis;
pub mod convergence;
pub mod field;
pub mod grid;
pub mod io;
pub mod norm;
pub mod reference;
pub mod solution;
pub mod traits;
pub mod types;

pub use analysis::{run, AnalysisConfig, AnalysisResult};
pub use convergence::{aggregate, ConvergenceCurve, ConvergenceTable};
pub use field::Field;
pub use grid::StructuredGrid;
pub use norm::Norm;
pub use reference::ReferenceLine;
pub use solution::ManufacturedSolution;
