//! Closed-form projectile kinematics in real arithmetic.

use std::cmp::Ordering;

use crate::error::TrajectoryError;
use crate::params::PlotConfig;

/// Earliest time at which the projectile leaves the plot rectangle.
///
/// The vertical bound is the positive root of `y(t) = y_min`; the earlier
/// root of the quadratic is behind the launch and discarded. The horizontal
/// bound depends on which edge the projectile moves toward, decided on the
/// exact integer degree value so that `|θ| = 90°` (zero horizontal velocity,
/// no horizontal bound) is hit exactly.
pub fn time_in_plot(
    theta_deg: i32,
    cfg: &PlotConfig,
    v0x: f64,
    v0y: f64,
) -> Result<f64, TrajectoryError> {
    let radicand = v0y * v0y - 2.0 * cfg.g * (cfg.y_min - cfg.y0);
    if radicand < 0.0 {
        return Err(TrajectoryError::DegenerateGeometry { radicand });
    }
    let t_max_y = (v0y + radicand.sqrt()) / cfg.g;

    let t_max = match theta_deg.abs().cmp(&90) {
        // v0x is exactly zero, so only the vertical bound applies
        Ordering::Equal => t_max_y,
        // moving toward x_max
        Ordering::Less => {
            let t_max_x = (cfg.x_max - cfg.x0) / v0x;
            t_max_x.min(t_max_y)
        }
        // moving toward x_min
        Ordering::Greater => {
            let t_max_x = (cfg.x_min - cfg.x0) / v0x;
            t_max_x.min(t_max_y)
        }
    };
    Ok(t_max)
}

/// Horizontal position at time `t`.
pub fn x_value(x0: f64, v0x: f64, t: f64) -> f64 {
    x0 + v0x * t
}

/// Vertical position at time `t`.
pub fn y_value(y0: f64, v0y: f64, g: f64, t: f64) -> f64 {
    y0 + v0y * t - 0.5 * g * t * t
}
