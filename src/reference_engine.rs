//! Floating-point reference implementation of the trajectory interface.

use nalgebra::Vector2;

use crate::constants::COSINE_TAYLOR_TERMS;
use crate::engine::{LaunchInputs, TrajectoryEngine};
use crate::error::TrajectoryError;
use crate::params::PlotConfig;
use crate::physics::{time_in_plot, x_value, y_value};
use crate::trig::{cosine_approx, degrees_to_radians, sine_approx};

/// A sampled path in real coordinates: parallel time and position arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub points: Vec<Vector2<f64>>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Split into the bare `(x_samples, y_samples)` interface pair.
    pub fn into_sequences(self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.points.iter().map(|p| p.x).collect();
        let ys = self.points.iter().map(|p| p.y).collect();
        (xs, ys)
    }
}

/// Trajectory generator in native `f64` arithmetic.
#[derive(Debug, Clone)]
pub struct FloatEngine {
    cfg: PlotConfig,
    taylor_terms: u32,
}

impl FloatEngine {
    pub fn new(cfg: PlotConfig, taylor_terms: u32) -> Result<Self, TrajectoryError> {
        cfg.validate()?;
        if taylor_terms < 1 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "taylor_terms",
                message: "the cosine series needs at least one term".to_string(),
            });
        }
        Ok(FloatEngine { cfg, taylor_terms })
    }

    /// Engine over the canonical plot area and series length.
    pub fn standard() -> Self {
        FloatEngine {
            cfg: PlotConfig::default(),
            taylor_terms: COSINE_TAYLOR_TERMS,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.cfg
    }

    /// Full trajectory with time stamps.
    pub fn trajectory(&self, inputs: &LaunchInputs) -> Result<Trajectory, TrajectoryError> {
        inputs.validate()?;
        let cfg = &self.cfg;

        let theta = degrees_to_radians(inputs.theta_0_deg);
        let cos_theta = cosine_approx(theta, inputs.theta_0_deg, self.taylor_terms);
        let sin_theta = sine_approx(theta, cos_theta);
        let v0 = Vector2::new(inputs.v_0 * cos_theta, inputs.v_0 * sin_theta);

        let t_max = time_in_plot(inputs.theta_0_deg, cfg, v0.x, v0.y)?;

        let times = linspace(t_max, inputs.num_pts);
        let points = times
            .iter()
            .map(|&t| {
                Vector2::new(
                    x_value(cfg.x0, v0.x, t),
                    y_value(cfg.y0, v0.y, cfg.g, t),
                )
            })
            .collect();
        Ok(Trajectory { times, points })
    }
}

impl TrajectoryEngine for FloatEngine {
    type Sample = f64;

    fn projectile_path(
        &self,
        inputs: &LaunchInputs,
    ) -> Result<(Vec<f64>, Vec<f64>), TrajectoryError> {
        self.trajectory(inputs).map(Trajectory::into_sequences)
    }
}

/// Evenly spaced ascending samples over `[0, stop]`, endpoints included.
/// A single-sample grid degenerates to `[0]`.
fn linspace(stop: f64, num: usize) -> Vec<f64> {
    if num == 1 {
        return vec![0.0];
    }
    let last = (num - 1) as f64;
    (0..num).map(|i| stop * i as f64 / last).collect()
}
