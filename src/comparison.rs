//! Differential harness: the fixed-point engine is accepted only if every
//! decoded sample agrees with the floating-point reference.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use serde::Serialize;

use crate::engine::{LaunchInputs, TrajectoryEngine};
use crate::error::{Axis, TrajectoryError};
use crate::fixed_engine::FixedEngine;
use crate::reference_engine::FloatEngine;

/// Both engines' view of one sample index, kept in raw and decoded form so
/// a divergence can be debugged at the integer level.
#[derive(Debug, Clone, Serialize)]
pub struct SampleComparison {
    pub index: usize,
    /// Raw x field residue as emitted by the fixed-point engine
    pub x_fixed_raw: String,
    /// Raw y field residue as emitted by the fixed-point engine
    pub y_fixed_raw: String,
    /// Signed scaled integer behind the fixed-point x residue
    pub x_fixed_scaled: String,
    /// Reference x scaled by `SCALE_FP` and rounded
    pub x_reference_scaled: String,
    /// Signed scaled integer behind the fixed-point y residue
    pub y_fixed_scaled: String,
    /// Reference y scaled by `SCALE_FP` and rounded
    pub y_reference_scaled: String,
    pub x_decoded: f64,
    pub x_reference: f64,
    pub y_decoded: f64,
    pub y_reference: f64,
}

impl SampleComparison {
    pub fn x_difference(&self) -> f64 {
        (self.x_decoded - self.x_reference).abs()
    }

    pub fn y_difference(&self) -> f64 {
        (self.y_decoded - self.y_reference).abs()
    }
}

/// Outcome of running both engines on the same launch.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub inputs: LaunchInputs,
    pub samples: Vec<SampleComparison>,
}

impl ComparisonReport {
    /// Largest decoded-vs-reference difference over all samples and axes.
    pub fn max_difference(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.x_difference().max(s.y_difference()))
            .fold(0.0, f64::max)
    }

    /// Assert per-sample closeness; the error names the first offending
    /// sample and axis.
    pub fn check(&self, tolerance: f64) -> Result<(), TrajectoryError> {
        for sample in &self.samples {
            if sample.x_difference() > tolerance {
                return Err(TrajectoryError::ToleranceExceeded {
                    index: sample.index,
                    axis: Axis::X,
                    difference: sample.x_difference(),
                    tolerance,
                });
            }
            if sample.y_difference() > tolerance {
                return Err(TrajectoryError::ToleranceExceeded {
                    index: sample.index,
                    axis: Axis::Y,
                    difference: sample.y_difference(),
                    tolerance,
                });
            }
        }
        Ok(())
    }
}

/// Run both engines on identical inputs and pair up their outputs.
///
/// Neither engine reads the other's state; this only observes.
pub fn compare_engines(
    fixed: &FixedEngine,
    reference: &FloatEngine,
    inputs: &LaunchInputs,
) -> Result<ComparisonReport, TrajectoryError> {
    let (fixed_xs, fixed_ys) = fixed.projectile_path(inputs)?;
    let (ref_xs, ref_ys) = reference.projectile_path(inputs)?;
    let params = fixed.params();
    let scale = params.scale_as_f64();

    let samples = fixed_xs
        .iter()
        .zip(&fixed_ys)
        .zip(ref_xs.iter().zip(&ref_ys))
        .enumerate()
        .map(|(index, ((fx, fy), (&rx, &ry)))| SampleComparison {
            index,
            x_fixed_raw: fx.raw().to_string(),
            y_fixed_raw: fy.raw().to_string(),
            x_fixed_scaled: params.to_signed(fx).to_string(),
            x_reference_scaled: scaled_reference(rx, scale),
            y_fixed_scaled: params.to_signed(fy).to_string(),
            y_reference_scaled: scaled_reference(ry, scale),
            x_decoded: params.decode(fx),
            x_reference: rx,
            y_decoded: params.decode(fy),
            y_reference: ry,
        })
        .collect();

    Ok(ComparisonReport {
        inputs: *inputs,
        samples,
    })
}

/// Run the comparison and enforce the tolerance in one step.
pub fn verify_equivalence(
    fixed: &FixedEngine,
    reference: &FloatEngine,
    inputs: &LaunchInputs,
    tolerance: f64,
) -> Result<ComparisonReport, TrajectoryError> {
    let report = compare_engines(fixed, reference, inputs)?;
    report.check(tolerance)?;
    Ok(report)
}

fn scaled_reference(value: f64, scale: f64) -> String {
    BigInt::from_f64((value * scale).round())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unrepresentable".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_COMPARISON_TOLERANCE;

    #[test]
    fn test_report_shape_and_agreement() {
        let fixed = FixedEngine::standard();
        let reference = FloatEngine::standard();
        let inputs = LaunchInputs::new(20, 105, 100.0);
        let report =
            verify_equivalence(&fixed, &reference, &inputs, DEFAULT_COMPARISON_TOLERANCE)
                .unwrap();
        assert_eq!(report.samples.len(), 20);
        assert_eq!(report.samples[0].index, 0);
        assert!(report.max_difference() <= DEFAULT_COMPARISON_TOLERANCE);
    }

    #[test]
    fn test_zero_tolerance_flags_a_sample() {
        let fixed = FixedEngine::standard();
        let reference = FloatEngine::standard();
        let inputs = LaunchInputs::new(20, 45, 100.0);
        let report = compare_engines(&fixed, &reference, &inputs).unwrap();
        let err = report.check(0.0).unwrap_err();
        match err {
            TrajectoryError::ToleranceExceeded { tolerance, .. } => assert_eq!(tolerance, 0.0),
            other => panic!("expected ToleranceExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_inputs_surface_before_comparison() {
        let fixed = FixedEngine::standard();
        let reference = FloatEngine::standard();
        let inputs = LaunchInputs::new(20, 181, 100.0);
        assert!(matches!(
            compare_engines(&fixed, &reference, &inputs),
            Err(TrajectoryError::InvalidInput { .. })
        ));
    }
}
