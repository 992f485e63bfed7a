//! Error norms
use crate::{field::Field, types::ConvergenceError};
use itertools::izip;
use std::fmt;

/// Norm of the pointwise difference between a numerical and an exact field
///
/// All norms are normalised by the number of cells so that values from different
/// resolutions of the same domain can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Norm {
    /// Root mean square difference
    L2,
    /// Mean absolute difference
    L1,
    /// Maximum absolute difference
    LInf,
}

impl Norm {
    /// Every supported norm
    pub const ALL: [Norm; 3] = [Norm::L2, Norm::L1, Norm::LInf];

    /// Name of the norm
    pub fn name(&self) -> &'static str {
        match self {
            Self::L2 => "L2",
            Self::L1 => "L1",
            Self::LInf => "LInf",
        }
    }

    /// Compute the norm of `numerical - exact`
    pub fn compute(&self, numerical: &Field, exact: &Field) -> Result<f64, ConvergenceError> {
        if numerical.shape() != exact.shape() {
            return Err(ConvergenceError::ShapeMismatch {
                expected: exact.shape(),
                found: numerical.shape(),
            });
        }
        let diffs = izip!(numerical.values(), exact.values()).map(|(a, b)| (a - b).abs());
        let npts = exact.len() as f64;
        Ok(match self {
            Self::L2 => (diffs.map(|d| d * d).sum::<f64>() / npts).sqrt(),
            Self::L1 => diffs.sum::<f64>() / npts,
            // A NaN difference propagates to the result
            Self::LInf => diffs.fold(0.0, |m, d| if d.is_nan() || d > m { d } else { m }),
        })
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the norm of the difference between two fields
pub fn norm(numerical: &Field, exact: &Field, kind: Norm) -> Result<f64, ConvergenceError> {
    kind.compute(numerical, exact)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use paste::paste;

    fn field_a() -> Field {
        Field::from_fn([3, 4, 2], |[i, j, k]| (i as f64 + 0.5 * j as f64).sin() + k as f64)
    }

    fn field_b() -> Field {
        Field::from_fn([3, 4, 2], |[i, j, k]| (i * j) as f64 * 0.1 - k as f64)
    }

    macro_rules! make_tests {
        ($norm:ident) => {
            paste! {
                #[test]
                fn [< test_identity_ $norm:lower >]() {
                    //! Test that the norm of a field against itself is exactly zero
                    let a = field_a();
                    assert_eq!(Norm::$norm.compute(&a, &a).unwrap(), 0.0);
                }

                #[test]
                fn [< test_symmetry_ $norm:lower >]() {
                    //! Test that swapping the fields does not change the norm
                    let a = field_a();
                    let b = field_b();
                    assert_eq!(
                        Norm::$norm.compute(&a, &b).unwrap(),
                        Norm::$norm.compute(&b, &a).unwrap()
                    );
                }

                #[test]
                fn [< test_shape_mismatch_ $norm:lower >]() {
                    //! Test that fields with different shapes are rejected
                    let a = field_a();
                    let b = Field::zeros([3, 2, 4]);
                    assert!(matches!(
                        norm(&a, &b, Norm::$norm),
                        Err(ConvergenceError::ShapeMismatch {
                            expected: [3, 2, 4],
                            found: [3, 4, 2]
                        })
                    ));
                }

                #[test]
                fn [< test_nan_propagates_ $norm:lower >]() {
                    //! Test that a NaN in the numerical field gives a NaN norm
                    let exact = Field::from_values([3, 1, 1], &[1.0, 2.0, 2.5]).unwrap();
                    let numerical = Field::from_values([3, 1, 1], &[1.0, f64::NAN, 3.0]).unwrap();
                    assert!(Norm::$norm.compute(&numerical, &exact).unwrap().is_nan());
                    assert!(Norm::$norm.compute(&exact, &numerical).unwrap().is_nan());
                }

                #[test]
                fn [< test_constant_offset_ $norm:lower >]() {
                    //! Test that a constant offset gives the offset for every norm
                    let a = field_a();
                    let b = Field::from_fn(a.shape(), |index| a.get(index).unwrap() + 0.25);
                    assert_relative_eq!(Norm::$norm.compute(&b, &a).unwrap(), 0.25, epsilon = 1e-14);
                }
            }
        };
    }

    make_tests!(L2);
    make_tests!(L1);
    make_tests!(LInf);

    #[test]
    fn test_l2_is_root_mean_square() {
        let exact = Field::zeros([2, 1, 2]);
        let numerical = Field::from_values([2, 1, 2], &[1.0, -1.0, 3.0, 1.0]).unwrap();
        assert_relative_eq!(Norm::L2.compute(&numerical, &exact).unwrap(), 3.0f64.sqrt());
        assert_relative_eq!(Norm::L1.compute(&numerical, &exact).unwrap(), 1.5);
        assert_relative_eq!(Norm::LInf.compute(&numerical, &exact).unwrap(), 3.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            Norm::ALL.map(|n| n.to_string()),
            ["L2".to_string(), "L1".to_string(), "LInf".to_string()]
        );
    }
}
