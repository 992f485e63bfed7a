//! Reference lines of idealised convergence order
use crate::types::ConvergenceError;

/// Resolution offset between the anchor and the point used for the label
pub const DEFAULT_ANNOTATION_OFFSET: f64 = 4.0;

/// Rotation in degrees that the slope angle of a label is offset by
pub const DEFAULT_LABEL_ROTATION: f64 = -90.0;

/// Sample points of an `O(h^p)` error curve, for drawing on a log-log plot
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceLine {
    /// Convergence order
    pub order: f64,
    /// Resolutions at the two ends of the line
    pub resolutions: [f64; 2],
    /// Errors at the two ends of the line
    pub errors: [f64; 2],
    /// Resolution at which the label is placed
    pub annotation_resolution: f64,
    /// Error at which the label is placed
    pub annotation_error: f64,
    /// Label text
    pub label: String,
    /// Angle of the label in degrees
    pub angle: f64,
}

/// Generator of reference lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLineGenerator {
    annotation_offset: f64,
    label_rotation: f64,
}

impl Default for ReferenceLineGenerator {
    fn default() -> Self {
        Self {
            annotation_offset: DEFAULT_ANNOTATION_OFFSET,
            label_rotation: DEFAULT_LABEL_ROTATION,
        }
    }
}

impl ReferenceLineGenerator {
    /// Create a generator with the default offset and rotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution offset of the label
    pub fn with_annotation_offset(mut self, offset: f64) -> Self {
        self.annotation_offset = offset;
        self
    }

    /// Set the rotation in degrees added to the slope angle of the label
    pub fn with_label_rotation(mut self, rotation: f64) -> Self {
        self.label_rotation = rotation;
        self
    }

    /// Generate a reference line of order `order`
    ///
    /// The error model is `e(n) = anchor_error * (n / anchor_resolution)^(-order)`, which passes
    /// through `(anchor_resolution, anchor_error)`. The line runs between the two resolutions in
    /// `bracket`. The label sits at `anchor_resolution` with the error of the model at
    /// `anchor_resolution + offset`, so it is drawn just above the line.
    pub fn generate(
        &self,
        order: f64,
        anchor_resolution: f64,
        anchor_error: f64,
        bracket: [f64; 2],
    ) -> Result<ReferenceLine, ConvergenceError> {
        for (name, value) in [
            ("order", order),
            ("anchor resolution", anchor_resolution),
            ("anchor error", anchor_error),
            ("lower bracket", bracket[0]),
            ("upper bracket", bracket[1]),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConvergenceError::InvalidOrderParameters(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        let model = |n: f64| anchor_error * (n / anchor_resolution).powf(-order);
        Ok(ReferenceLine {
            order,
            resolutions: bracket,
            errors: bracket.map(model),
            annotation_resolution: anchor_resolution,
            annotation_error: model(anchor_resolution + self.annotation_offset),
            label: order_label(order),
            angle: self.label_rotation - (-order).atan().to_degrees(),
        })
    }
}

/// Generate a reference line with the default offset and rotation
pub fn generate(
    order: f64,
    anchor_resolution: f64,
    anchor_error: f64,
    bracket: [f64; 2],
) -> Result<ReferenceLine, ConvergenceError> {
    ReferenceLineGenerator::default().generate(order, anchor_resolution, anchor_error, bracket)
}

/// Label for a convergence order, eg "2nd order"
pub fn order_label(order: f64) -> String {
    if order.fract() != 0.0 {
        return format!("order {order}");
    }
    let n = order as u64;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix} order")
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_second_order() {
        let line = generate(2.0, 70.0, 5e-4, [40.0, 140.0]).unwrap();
        assert!(line.errors[0] > line.errors[1]);
        assert_relative_eq!(
            line.errors[0],
            5e-4 * (70.0f64 / 40.0).powi(2),
            max_relative = 1e-12
        );
        assert_relative_eq!(line.errors[1], 5e-4 / 4.0, max_relative = 1e-12);
        assert_relative_eq!(
            line.angle,
            -90.0 - 180.0 / PI * (-2.0f64).atan(),
            max_relative = 1e-12
        );
        assert_relative_eq!(line.annotation_resolution, 70.0);
        assert_relative_eq!(
            line.annotation_error,
            5e-4 * (74.0f64 / 70.0).powi(-2),
            max_relative = 1e-12
        );
        assert_eq!(line.label, "2nd order");
    }

    #[test]
    fn test_passes_through_anchor() {
        let line = ReferenceLineGenerator::new()
            .with_annotation_offset(0.0)
            .generate(3.0, 50.0, 1e-3, [20.0, 100.0])
            .unwrap();
        assert_relative_eq!(line.annotation_error, 1e-3, max_relative = 1e-12);
        assert_relative_eq!(line.errors[0] / line.errors[1], 125.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rotation() {
        let line = ReferenceLineGenerator::new()
            .with_label_rotation(-110.0)
            .generate(3.0, 70.0, 1e-5, [40.0, 140.0])
            .unwrap();
        assert_relative_eq!(
            line.angle,
            -110.0 - 180.0 / PI * (-3.0f64).atan(),
            max_relative = 1e-12
        );
        assert_eq!(line.label, "3rd order");
    }

    #[test]
    fn test_invalid_parameters() {
        for (order, n, e, bracket) in [
            (0.0, 70.0, 1e-3, [40.0, 140.0]),
            (-1.0, 70.0, 1e-3, [40.0, 140.0]),
            (2.0, 0.0, 1e-3, [40.0, 140.0]),
            (2.0, 70.0, 0.0, [40.0, 140.0]),
            (2.0, 70.0, 1e-3, [-40.0, 140.0]),
            (2.0, 70.0, 1e-3, [40.0, f64::NAN]),
        ] {
            assert!(matches!(
                generate(order, n, e, bracket),
                Err(ConvergenceError::InvalidOrderParameters(_))
            ));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(order_label(1.0), "1st order");
        assert_eq!(order_label(3.0), "3rd order");
        assert_eq!(order_label(4.0), "4th order");
        assert_eq!(order_label(11.0), "11th order");
        assert_eq!(order_label(22.0), "22nd order");
        assert_eq!(order_label(1.5), "order 1.5");
    }
}
