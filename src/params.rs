use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

use crate::constants::{
    COSINE_TAYLOR_TERMS, G_ACCEL_MPS2, LAUNCH_X0_M, LAUNCH_Y0_M, PLOT_X_MAX_M, PLOT_Y_MAX_M,
};
use crate::error::TrajectoryError;

/// Immutable fixed-point field parameters.
///
/// Constructed once and passed explicitly to everything that touches the
/// fixed-point domain. A real `r` is represented as
/// `round(r * scale) mod prime`; residues above `half_prime` decode as
/// negative. Any scaled magnitude above `range_check_bound` is
/// unrepresentable and must be rejected, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPointParams {
    /// Scale factor applied to reals (10^20)
    pub scale: BigUint,
    /// Exact integer square root of `scale` (10^10)
    pub scale_sqrt: BigUint,
    /// Field modulus: 2^251 + 17·2^192 + 1
    pub prime: BigUint,
    /// Sign threshold, `(prime - 1) / 2`
    pub half_prime: BigUint,
    /// Maximum representable scaled magnitude (2^120)
    pub range_check_bound: BigUint,
    /// Term count for the cosine Taylor series
    pub taylor_terms: u32,
    /// π scaled by `scale`, i.e. `3141592654 · scale / 10^9`
    pub pi: BigUint,
}

impl FixedPointParams {
    /// The canonical parameter set used by the fixed-point engine.
    pub fn standard() -> Self {
        let ten = BigUint::from(10u32);
        let scale = ten.pow(20);
        let scale_sqrt = ten.pow(10);
        let prime = (BigUint::one() << 251) + (BigUint::from(17u32) << 192) + BigUint::one();
        let half_prime = (&prime - BigUint::one()) / BigUint::from(2u32);
        let range_check_bound = BigUint::one() << 120;
        let pi = BigUint::from(3_141_592_654u64) * ten.pow(11);
        FixedPointParams {
            scale,
            scale_sqrt,
            prime,
            half_prime,
            range_check_bound,
            taylor_terms: COSINE_TAYLOR_TERMS,
            pi,
        }
    }
}

/// Canonical fixed-point parameters, built on first use.
pub static STANDARD_FP_PARAMS: Lazy<FixedPointParams> = Lazy::new(FixedPointParams::standard);

/// Plot-area geometry and gravity, shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Gravitational acceleration in m/s², must be positive
    pub g: f64,
    /// Launch x-coordinate in meters
    pub x0: f64,
    /// Launch y-coordinate in meters
    pub y0: f64,
    /// Left plot edge in meters
    pub x_min: f64,
    /// Right plot edge in meters
    pub x_max: f64,
    /// Bottom plot edge in meters
    pub y_min: f64,
    /// Top plot edge in meters
    pub y_max: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            g: G_ACCEL_MPS2,
            x0: LAUNCH_X0_M,
            y0: LAUNCH_Y0_M,
            x_min: -PLOT_X_MAX_M,
            x_max: PLOT_X_MAX_M,
            y_min: -PLOT_Y_MAX_M,
            y_max: PLOT_Y_MAX_M,
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if !self.g.is_finite() || self.g <= 0.0 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "g",
                message: format!("gravitational acceleration must be positive, got {}", self.g),
            });
        }
        if self.x_min >= self.x_max {
            return Err(TrajectoryError::InvalidInput {
                parameter: "x_min",
                message: format!("x_min {} must be below x_max {}", self.x_min, self.x_max),
            });
        }
        if self.y_min >= self.y_max {
            return Err(TrajectoryError::InvalidInput {
                parameter: "y_min",
                message: format!("y_min {} must be below y_max {}", self.y_min, self.y_max),
            });
        }
        Ok(())
    }
}
