//! Aggregation of error norms over a resolution sweep
use super::ConvergenceTable;
use crate::{
    field::Field,
    norm::Norm,
    traits::ExactSolution,
    types::{ConvergenceError, FieldData, GeoData, Resolution},
};
use std::collections::{btree_map::Entry, BTreeMap};

/// Compute the error of every numerical field against an exact solution
///
/// For each configuration option in `field_data`, each resolution present for that option and
/// each norm in `norms`, the exact solution is evaluated at `time` on the grid for that
/// resolution and the error is stored at `[option][norm][field_name][resolution]`.
///
/// A resolution with no grid in `geo_data` aborts the aggregation with
/// [ConvergenceError::MissingGridForResolution]; a field whose shape differs from its grid aborts
/// it with [ConvergenceError::ShapeMismatch].
pub fn aggregate(
    geo_data: &GeoData,
    field_data: &FieldData,
    time: f64,
    solution: &impl ExactSolution,
    field_name: &str,
    norms: &[Norm],
) -> Result<ConvergenceTable, ConvergenceError> {
    let mut table = ConvergenceTable::new();
    // Exact fields are shared by all options at the same resolution
    let mut exact_fields = BTreeMap::<Resolution, Field>::new();

    for (option, fields) in field_data {
        for (&resolution, numerical) in fields {
            let exact = match exact_fields.entry(resolution) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    let grid = geo_data
                        .get(&resolution)
                        .ok_or(ConvergenceError::MissingGridForResolution(resolution))?;
                    e.insert(solution.evaluate(grid, time))
                }
            };
            for norm in norms {
                let error = norm.compute(numerical, exact)?;
                log::debug!("{option} {norm} {field_name} {resolution}: {error:e}");
                *table.entry(option, *norm, field_name, resolution) = error;
            }
        }
    }
    Ok(table)
}
