use serde::Serialize;

use crate::error::TrajectoryError;

/// A launch request: sample count, launch angle in whole degrees, and
/// initial speed. Both engines accept the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchInputs {
    pub num_pts: usize,
    pub theta_0_deg: i32,
    pub v_0: f64,
}

impl LaunchInputs {
    pub fn new(num_pts: usize, theta_0_deg: i32, v_0: f64) -> Self {
        LaunchInputs {
            num_pts,
            theta_0_deg,
            v_0,
        }
    }

    /// Reject out-of-domain inputs before any computation starts.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if self.num_pts < 1 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "num_pts",
                message: format!("need at least one sample point, got {}", self.num_pts),
            });
        }
        if self.theta_0_deg < -179 || self.theta_0_deg > 180 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "theta_0_deg",
                message: format!(
                    "launch angle must lie in [-179, 180] degrees, got {}",
                    self.theta_0_deg
                ),
            });
        }
        if !self.v_0.is_finite() || self.v_0 < 1.0 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "v_0",
                message: format!("launch speed must be at least 1, got {}", self.v_0),
            });
        }
        Ok(())
    }
}

/// One trajectory computation, abstracted over the arithmetic domain.
///
/// The reference engine yields `f64` samples; the fixed-point engine yields
/// field residues. The comparison harness is generic over this trait plus a
/// decode step, so the two implementations never need to know about each
/// other.
pub trait TrajectoryEngine {
    type Sample;

    /// Compute the `(x, y)` sample sequences for a launch. Both returned
    /// sequences have exactly `inputs.num_pts` entries.
    fn projectile_path(
        &self,
        inputs: &LaunchInputs,
    ) -> Result<(Vec<Self::Sample>, Vec<Self::Sample>), TrajectoryError>;
}
