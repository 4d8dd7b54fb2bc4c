//! Taylor-series trigonometry for the floating-point reference engine.
//!
//! There is deliberately no call to `f64::cos` here: both engines approximate
//! cosine with the same truncated series so that their outputs can be
//! compared sample by sample.

use std::cmp::Ordering;

use crate::constants::APPROX_PI;

/// Quadrant classification of a launch angle.
///
/// Keyed on the exact integer degree value: the radian form is the product
/// of a truncated π and a division by 180 and carries rounding noise, so it
/// must never drive branch decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Exactly +90°; cosine is exactly zero, no series evaluation
    PosVertical,
    /// Exactly -90°; cosine is exactly zero, no series evaluation
    NegVertical,
    /// (90°, 180°]: reduce via π - θ and negate the series value
    Second,
    /// [-179°, -90°): reduce via -π - θ and negate the series value
    Third,
    /// (-90°, 90°): the series argument is already in range
    FirstOrFourth,
}

impl Quadrant {
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.cmp(&90) {
            Ordering::Equal => Quadrant::PosVertical,
            Ordering::Greater => Quadrant::Second,
            Ordering::Less => match degrees.cmp(&-90) {
                Ordering::Equal => Quadrant::NegVertical,
                Ordering::Less => Quadrant::Third,
                Ordering::Greater => Quadrant::FirstOrFourth,
            },
        }
    }
}

/// Degrees to radians via the shared truncated π.
pub fn degrees_to_radians(degrees: i32) -> f64 {
    degrees as f64 * APPROX_PI / 180.0
}

/// Evaluate the degree-2(n-1) Taylor polynomial for cosine:
/// the signed sum over i of θ^(2i) / (2i)!.
///
/// Only trustworthy for |θ| ≤ π/2; callers reduce larger arguments first.
pub fn cosine_n_terms(theta: f64, n: u32) -> f64 {
    let mut cos_nth = 0.0;
    for i in 0..n {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        cos_nth += sign * theta.powi(2 * i as i32) / factorial(2 * i);
    }
    cos_nth
}

fn factorial(k: u32) -> f64 {
    (1..=k).map(f64::from).product()
}

/// Quadrant-reduced cosine approximation.
///
/// The reduction keeps the series argument inside [-π/2, π/2], where the
/// truncation error is bounded; the sign flip restores the 2nd/3rd-quadrant
/// value. ±90° short-circuits to exact zero.
pub fn cosine_approx(theta: f64, theta_deg: i32, n: u32) -> f64 {
    match Quadrant::from_degrees(theta_deg) {
        Quadrant::PosVertical | Quadrant::NegVertical => 0.0,
        Quadrant::Second => -cosine_n_terms(APPROX_PI - theta, n),
        Quadrant::Third => -cosine_n_terms(-APPROX_PI - theta, n),
        Quadrant::FirstOrFourth => cosine_n_terms(theta, n),
    }
}

/// Sine from the Pythagorean identity, |sin θ| = sqrt(1 - cos²θ), with the
/// sign taken from θ. The radicand is clamped at zero to guard rounding.
pub fn sine_approx(theta: f64, cos_theta: f64) -> f64 {
    let magnitude = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    if theta >= 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COSINE_TAYLOR_TERMS;

    #[test]
    fn test_quadrant_classification() {
        assert_eq!(Quadrant::from_degrees(90), Quadrant::PosVertical);
        assert_eq!(Quadrant::from_degrees(-90), Quadrant::NegVertical);
        assert_eq!(Quadrant::from_degrees(91), Quadrant::Second);
        assert_eq!(Quadrant::from_degrees(180), Quadrant::Second);
        assert_eq!(Quadrant::from_degrees(-91), Quadrant::Third);
        assert_eq!(Quadrant::from_degrees(-179), Quadrant::Third);
        assert_eq!(Quadrant::from_degrees(0), Quadrant::FirstOrFourth);
        assert_eq!(Quadrant::from_degrees(89), Quadrant::FirstOrFourth);
        assert_eq!(Quadrant::from_degrees(-89), Quadrant::FirstOrFourth);
    }

    #[test]
    fn test_cosine_exactly_zero_at_vertical() {
        for deg in [90, -90] {
            let theta = degrees_to_radians(deg);
            assert_eq!(cosine_approx(theta, deg, COSINE_TAYLOR_TERMS), 0.0);
        }
    }

    #[test]
    fn test_cosine_known_values() {
        let n = COSINE_TAYLOR_TERMS;
        assert_eq!(cosine_approx(0.0, 0, n), 1.0);

        let theta = degrees_to_radians(60);
        assert!((cosine_approx(theta, 60, n) - 0.5).abs() < 1e-5);

        // 2nd quadrant: cos(120°) = -0.5
        let theta = degrees_to_radians(120);
        assert!((cosine_approx(theta, 120, n) + 0.5).abs() < 1e-5);

        // 3rd quadrant: cos(-120°) = -0.5
        let theta = degrees_to_radians(-120);
        assert!((cosine_approx(theta, -120, n) + 0.5).abs() < 1e-5);

        // 180° maps onto the series at -π/2 shifted: cos(180°) = -1
        let theta = degrees_to_radians(180);
        assert!((cosine_approx(theta, 180, n) + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_reduced_argument_always_within_half_pi() {
        let n = COSINE_TAYLOR_TERMS;
        for deg in -179..=180 {
            let theta = degrees_to_radians(deg);
            let reduced = match Quadrant::from_degrees(deg) {
                Quadrant::PosVertical | Quadrant::NegVertical => 0.0,
                Quadrant::Second => APPROX_PI - theta,
                Quadrant::Third => -APPROX_PI - theta,
                Quadrant::FirstOrFourth => theta,
            };
            assert!(
                reduced.abs() <= APPROX_PI / 2.0 + 1e-9,
                "degree {} reduced to {}",
                deg,
                reduced
            );
            // while we are here, the polynomial should stay sane
            let cos = cosine_approx(theta, deg, n);
            assert!(cos.abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_pythagorean_identity_across_domain() {
        let n = COSINE_TAYLOR_TERMS;
        for deg in -179..=180 {
            let theta = degrees_to_radians(deg);
            let cos = cosine_approx(theta, deg, n);
            let sin = sine_approx(theta, cos);
            assert!(
                (cos * cos + sin * sin - 1.0).abs() < 1e-5,
                "identity violated at {}°",
                deg
            );
        }
    }

    #[test]
    fn test_sine_sign_follows_theta() {
        let n = COSINE_TAYLOR_TERMS;
        for deg in [30, 150, 90] {
            let theta = degrees_to_radians(deg);
            let sin = sine_approx(theta, cosine_approx(theta, deg, n));
            assert!(sin > 0.0, "sin({}°) should be positive", deg);
        }
        for deg in [-30, -150, -90] {
            let theta = degrees_to_radians(deg);
            let sin = sine_approx(theta, cosine_approx(theta, deg, n));
            assert!(sin < 0.0, "sin({}°) should be negative", deg);
        }
    }
}
