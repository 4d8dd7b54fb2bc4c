/// Physical and plot-area constants shared by both trajectory engines

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.8;

/// Launch position x-coordinate in meters
pub const LAUNCH_X0_M: f64 = 0.0;

/// Launch position y-coordinate in meters
pub const LAUNCH_Y0_M: f64 = 0.0;

/// Right edge of the plot rectangle in meters (left edge is the negation)
pub const PLOT_X_MAX_M: f64 = 1000.0;

/// Top edge of the plot rectangle in meters (bottom edge is the negation)
pub const PLOT_Y_MAX_M: f64 = 500.0;

/// π truncated to nine decimal places.
///
/// The fixed-point engine carries π as `3141592654 * SCALE_FP / 10^9`, so the
/// floating-point reference must use the same truncated value for the radian
/// conversion and quadrant reduction. Substituting `f64::consts::PI` here
/// would make the two engines disagree on the series argument itself.
pub const APPROX_PI: f64 = 3.141592654;

/// Number of terms kept in the cosine Taylor series.
///
/// Five terms give a degree-8 polynomial; with the argument reduced into
/// [-π/2, π/2] the truncation error stays below θ¹⁰/10! ≈ 2.6e-6.
pub const COSINE_TAYLOR_TERMS: u32 = 5;

/// Default per-sample tolerance for the dual-engine comparison.
///
/// The dominant divergence between the engines is the integer square root in
/// the fixed-point sine, which is only good to one unit of
/// `SCALE_FP_SQRT / SCALE_FP` = 1e-10. Scaled by velocity and flight time the
/// decoded positions can drift a few parts in 1e7 from the reference, so the
/// default acceptance gate sits an order of magnitude above that.
pub const DEFAULT_COMPARISON_TOLERANCE: f64 = 1e-6;
