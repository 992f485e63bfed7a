//! Table of error norms
use super::ConvergenceCurve;
use crate::{norm::Norm, types::Resolution};
use itertools::Itertools;
use std::collections::BTreeMap;

type EntryKey = (String, Norm, String, Resolution);

/// One error value of a convergence table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceEntry {
    /// Configuration option
    pub option: String,
    /// Norm used to measure the error
    pub norm: Norm,
    /// Name of the field
    pub field: String,
    /// Resolution key
    pub resolution: Resolution,
    /// Error value
    pub error: f64,
}

/// Error norms keyed by configuration option, norm, field name and resolution
///
/// The table is sparse: an option only has entries for the fields and resolutions that were
/// written for it. Writing to a key that does not exist yet creates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceTable {
    errors: BTreeMap<EntryKey, f64>,
}

impl ConvergenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-fetch the error for a key
    ///
    /// A newly created entry holds NaN until it is written.
    pub fn entry(
        &mut self,
        option: &str,
        norm: Norm,
        field: &str,
        resolution: Resolution,
    ) -> &mut f64 {
        self.errors
            .entry((option.to_string(), norm, field.to_string(), resolution))
            .or_insert(f64::NAN)
    }

    /// Set the error for a key, returning the previous value if there was one
    pub fn insert(
        &mut self,
        option: &str,
        norm: Norm,
        field: &str,
        resolution: Resolution,
        error: f64,
    ) -> Option<f64> {
        self.errors
            .insert((option.to_string(), norm, field.to_string(), resolution), error)
    }

    /// The error for a key
    pub fn get(&self, option: &str, norm: Norm, field: &str, resolution: Resolution) -> Option<f64> {
        self.errors
            .get(&(option.to_string(), norm, field.to_string(), resolution))
            .copied()
    }

    /// Number of error values
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over all entries, ordered by option, norm, field and resolution
    pub fn entries(&self) -> impl Iterator<Item = ConvergenceEntry> + '_ {
        self.errors
            .iter()
            .map(|((option, norm, field, resolution), error)| ConvergenceEntry {
                option: option.clone(),
                norm: *norm,
                field: field.clone(),
                resolution: *resolution,
                error: *error,
            })
    }

    /// Configuration options that have at least one entry
    pub fn options(&self) -> Vec<&str> {
        self.errors
            .keys()
            .map(|(option, _, _, _)| option.as_str())
            .dedup()
            .collect()
    }

    /// Norms that have at least one entry for an option
    pub fn norms(&self, option: &str) -> Vec<Norm> {
        self.errors
            .keys()
            .filter(|(o, _, _, _)| o == option)
            .map(|(_, norm, _, _)| *norm)
            .dedup()
            .collect()
    }

    /// Fields that have at least one entry for an option and norm
    pub fn fields(&self, option: &str, norm: Norm) -> Vec<&str> {
        self.errors
            .keys()
            .filter(|(o, n, _, _)| o == option && *n == norm)
            .map(|(_, _, field, _)| field.as_str())
            .dedup()
            .collect()
    }

    /// Errors for one option, norm and field, sorted by resolution
    pub fn series(&self, option: &str, norm: Norm, field: &str) -> Vec<(Resolution, f64)> {
        let start = (option.to_string(), norm, field.to_string(), Resolution::MIN);
        let end = (option.to_string(), norm, field.to_string(), Resolution::MAX);
        self.errors
            .range(start..=end)
            .map(|((_, _, _, resolution), error)| (*resolution, *error))
            .collect()
    }

    /// One measured convergence curve per option that has entries for a norm and field
    ///
    /// Each curve is labelled with its option.
    pub fn curves(&self, norm: Norm, field: &str) -> Vec<ConvergenceCurve> {
        self.options()
            .into_iter()
            .filter_map(|option| {
                let series = self.series(option, norm, field);
                if series.is_empty() {
                    None
                } else {
                    Some(ConvergenceCurve::from_series(series, option))
                }
            })
            .collect()
    }
}

impl FromIterator<ConvergenceEntry> for ConvergenceTable {
    fn from_iter<I: IntoIterator<Item = ConvergenceEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<ConvergenceEntry> for ConvergenceTable {
    fn extend<I: IntoIterator<Item = ConvergenceEntry>>(&mut self, iter: I) {
        for e in iter {
            self.insert(&e.option, e.norm, &e.field, e.resolution, e.error);
        }
    }
}
