//! Measured convergence curves
use crate::types::Resolution;
use itertools::Itertools;

/// Errors of one configuration option as a function of resolution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceCurve {
    /// Resolutions, in increasing order
    pub resolutions: Vec<Resolution>,
    /// Error at each resolution
    pub errors: Vec<f64>,
    /// Label for the curve
    pub label: String,
}

impl ConvergenceCurve {
    /// Create a curve from `(resolution, error)` pairs in any order
    pub fn from_series(mut series: Vec<(Resolution, f64)>, label: &str) -> Self {
        series.sort_by_key(|(n, _)| *n);
        let (resolutions, errors) = series.into_iter().unzip();
        Self {
            resolutions,
            errors,
            label: label.to_string(),
        }
    }

    /// Number of points on the curve
    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    /// Is the curve empty?
    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    /// Observed convergence order between each pair of consecutive resolutions
    ///
    /// For points `(n_a, e_a)` and `(n_b, e_b)` this is `ln(e_a / e_b) / ln(n_b / n_a)`.
    pub fn observed_orders(&self) -> Vec<f64> {
        self.resolutions
            .iter()
            .zip(&self.errors)
            .tuple_windows()
            .map(|((na, ea), (nb, eb))| {
                let p = (ea / eb).ln() / (*nb as f64 / *na as f64).ln();
                if !p.is_finite() {
                    log::warn!(
                        "{}: observed order between resolutions {na} and {nb} is not finite",
                        self.label
                    );
                }
                p
            })
            .collect()
    }
}
