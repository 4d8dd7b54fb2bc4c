//! # Projectile Engine
//!
//! Deterministic projectile-trajectory generation under two arithmetic
//! models: a native `f64` reference implementation and a scaled fixed-point
//! twin whose values live in a prime field. Both approximate cosine with the
//! same truncated Taylor series and share every branch decision, so their
//! outputs can be compared sample by sample; the comparison harness is the
//! acceptance gate for the fixed-point engine.

// Re-export the main types and functions
pub use comparison::{compare_engines, verify_equivalence, ComparisonReport, SampleComparison};
pub use engine::{LaunchInputs, TrajectoryEngine};
pub use error::{Axis, TrajectoryError};
pub use fixed_engine::FixedEngine;
pub use fixed_point::Fp;
pub use params::{FixedPointParams, PlotConfig, STANDARD_FP_PARAMS};
pub use reference_engine::{FloatEngine, Trajectory};

// Module declarations
pub mod constants;
mod comparison;
mod engine;
mod error;
mod fixed_engine;
mod fixed_point;
mod params;
pub mod physics;
mod reference_engine;
pub mod trig;
