use num_bigint::BigInt;
use std::error::Error;
use std::fmt;

/// Axis of a trajectory sample, used to pinpoint comparison failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Error type for trajectory generation and the dual-engine comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// An input failed validation; nothing was computed.
    InvalidInput {
        parameter: &'static str,
        message: String,
    },
    /// The vertical-bound radicand went negative: the projectile never
    /// reaches the lower plot edge, so no exit time exists.
    DegenerateGeometry { radicand: f64 },
    /// A scaled magnitude exceeded the fixed-point range-check bound.
    EncodingOverflow { magnitude: BigInt },
    /// A decoded fixed-point sample diverged from the reference engine.
    ToleranceExceeded {
        index: usize,
        axis: Axis,
        difference: f64,
        tolerance: f64,
    },
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrajectoryError::InvalidInput { parameter, message } => {
                write!(f, "invalid input `{}`: {}", parameter, message)
            }
            TrajectoryError::DegenerateGeometry { radicand } => {
                write!(
                    f,
                    "degenerate geometry: vertical-bound radicand is negative ({})",
                    radicand
                )
            }
            TrajectoryError::EncodingOverflow { magnitude } => {
                write!(
                    f,
                    "encoding overflow: scaled magnitude {} exceeds the range-check bound",
                    magnitude
                )
            }
            TrajectoryError::ToleranceExceeded {
                index,
                axis,
                difference,
                tolerance,
            } => {
                write!(
                    f,
                    "sample {} diverged on {}: |difference| = {:e} exceeds tolerance {:e}",
                    index, axis, difference, tolerance
                )
            }
        }
    }
}

impl Error for TrajectoryError {}
