//! Convergence analysis of a resolution sweep
use crate::{
    convergence::{aggregate, ConvergenceCurve, ConvergenceTable},
    grid::check_domain_extent,
    norm::Norm,
    reference::{ReferenceLine, ReferenceLineGenerator},
    solution::EVALUATION_TIME,
    traits::ExactSolution,
    types::{ConvergenceError, FieldData, GeoData},
};

/// Relative tolerance used when checking that all grids cover the same domain
const EXTENT_RTOL: f64 = 1e-10;

/// An idealised convergence order to draw for comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceOrder {
    /// Convergence order
    pub order: f64,
    /// Resolution the line is anchored at
    pub anchor_resolution: f64,
    /// Error at the anchor resolution
    pub anchor_error: f64,
    /// Resolutions at the ends of the line
    pub bracket: [f64; 2],
    /// Rotation in degrees added to the slope angle of the label
    pub label_rotation: f64,
}

impl ReferenceOrder {
    /// Reference order whose error model is `scale * (n / n0)^(-order)`, anchored at 70 and
    /// drawn between 40 and 140
    fn sweep_default(order: f64, scale: f64, n0: f64, label_rotation: f64) -> Self {
        let anchor_resolution = 70.0;
        Self {
            order,
            anchor_resolution,
            anchor_error: scale * (anchor_resolution / n0).powf(-order),
            bracket: [40.0, 140.0],
            label_rotation,
        }
    }

    /// Generate the reference line
    pub fn line(&self) -> Result<ReferenceLine, ConvergenceError> {
        ReferenceLineGenerator::new()
            .with_label_rotation(self.label_rotation)
            .generate(
                self.order,
                self.anchor_resolution,
                self.anchor_error,
                self.bracket,
            )
    }
}

/// Configuration of a convergence analysis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Time at which the exact solution is evaluated
    pub time: f64,
    /// Name of the field being analysed
    pub field: String,
    /// Norms to compute
    pub norms: Vec<Norm>,
    /// Norm used for the measured convergence curves
    pub plot_norm: Norm,
    /// Reference orders to draw
    pub reference_orders: Vec<ReferenceOrder>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            time: EVALUATION_TIME,
            field: String::from("psi"),
            norms: vec![Norm::L2],
            plot_norm: Norm::L2,
            reference_orders: vec![
                ReferenceOrder::sweep_default(2.0, 3e-2, 9.0, -92.0),
                ReferenceOrder::sweep_default(3.0, 16e-3, 9.0, -110.0),
            ],
        }
    }
}

/// Output of a convergence analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Every computed error
    pub table: ConvergenceTable,
    /// Measured convergence curves, one per configuration option
    pub curves: Vec<ConvergenceCurve>,
    /// Reference lines of idealised order
    pub reference_lines: Vec<ReferenceLine>,
}

/// Run a convergence analysis
///
/// Computes the error of every field in `field_data` against `solution`, extracts one measured
/// curve per configuration option for the plot norm, and generates the reference lines.
pub fn run(
    config: &AnalysisConfig,
    geo_data: &GeoData,
    field_data: &FieldData,
    solution: &impl ExactSolution,
) -> Result<AnalysisResult, ConvergenceError> {
    log::info!(
        "Analysing field {} for {} options on {} grids",
        config.field,
        field_data.len(),
        geo_data.len()
    );
    if let Err(e) = check_domain_extent(geo_data, EXTENT_RTOL) {
        log::warn!("{e}");
    }

    let mut norms = config.norms.clone();
    if !norms.contains(&config.plot_norm) {
        norms.push(config.plot_norm);
    }
    let table = aggregate(
        geo_data,
        field_data,
        config.time,
        solution,
        &config.field,
        &norms,
    )?;

    let curves = table.curves(config.plot_norm, &config.field);
    for c in &curves {
        log::info!("{}: observed orders {:?}", c.label, c.observed_orders());
    }

    let reference_lines = config
        .reference_orders
        .iter()
        .map(ReferenceOrder::line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisResult {
        table,
        curves,
        reference_lines,
    })
}
