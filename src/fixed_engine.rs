//! Fixed-point twin of the reference engine.
//!
//! Same algorithm, same branch structure, but every value is a field residue
//! and every operation goes through the range-checked codec. Branch
//! decisions (quadrant, horizontal direction, sine sign) key on the exact
//! integer degree value, exactly as the reference does, so the two engines
//! can only diverge by arithmetic rounding, never by taking different paths.

use std::cmp::Ordering;

use crate::engine::{LaunchInputs, TrajectoryEngine};
use crate::error::TrajectoryError;
use crate::fixed_point::Fp;
use crate::params::{FixedPointParams, PlotConfig, STANDARD_FP_PARAMS};
use crate::trig::Quadrant;

/// Trajectory generator in scaled prime-field arithmetic.
#[derive(Debug, Clone)]
pub struct FixedEngine {
    params: FixedPointParams,
    cfg: PlotConfig,
}

impl FixedEngine {
    pub fn new(params: FixedPointParams, cfg: PlotConfig) -> Result<Self, TrajectoryError> {
        cfg.validate()?;
        if params.taylor_terms < 1 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "taylor_terms",
                message: "the cosine series needs at least one term".to_string(),
            });
        }
        Ok(FixedEngine { params, cfg })
    }

    /// Engine over the canonical field parameters and plot area.
    pub fn standard() -> Self {
        FixedEngine {
            params: STANDARD_FP_PARAMS.clone(),
            cfg: PlotConfig::default(),
        }
    }

    pub fn params(&self) -> &FixedPointParams {
        &self.params
    }

    pub fn config(&self) -> &PlotConfig {
        &self.cfg
    }

    /// Taylor polynomial for cosine on a reduced argument.
    ///
    /// Each term is derived from the previous one,
    /// `term_i = term_{i-1} · θ² / ((2i-1)(2i))`, so the factorial never
    /// materializes as a separate value.
    fn cosine_n_terms(&self, theta: &Fp) -> Result<Fp, TrajectoryError> {
        let p = &self.params;
        let theta_sq = p.mul(theta, theta)?;
        let mut acc = p.encode_int(1)?;
        let mut term = p.encode_int(1)?;
        for i in 1..p.taylor_terms {
            let divisor = i64::from(2 * i - 1) * i64::from(2 * i);
            term = p.div_int(&p.mul(&term, &theta_sq)?, divisor)?;
            acc = if i % 2 == 1 {
                p.sub(&acc, &term)?
            } else {
                p.add(&acc, &term)?
            };
        }
        Ok(acc)
    }

    /// Quadrant-reduced cosine; mirrors `trig::cosine_approx`.
    fn cosine_approx(&self, theta: &Fp, theta_deg: i32) -> Result<Fp, TrajectoryError> {
        let p = &self.params;
        match Quadrant::from_degrees(theta_deg) {
            Quadrant::PosVertical | Quadrant::NegVertical => p.encode_int(0),
            Quadrant::Second => {
                let reduced = p.sub(&p.pi_fp(), theta)?;
                p.neg(&self.cosine_n_terms(&reduced)?)
            }
            Quadrant::Third => {
                let reduced = p.sub(&p.neg(&p.pi_fp())?, theta)?;
                p.neg(&self.cosine_n_terms(&reduced)?)
            }
            Quadrant::FirstOrFourth => self.cosine_n_terms(theta),
        }
    }

    /// Sine from the Pythagorean identity; the sign comes from the degree
    /// value, whose sign matches θ exactly.
    fn sine_approx(&self, theta_deg: i32, cos_theta: &Fp) -> Result<Fp, TrajectoryError> {
        let p = &self.params;
        let one = p.encode_int(1)?;
        let radicand = p.sub(&one, &p.mul(cos_theta, cos_theta)?)?;
        let radicand = if p.is_negative(&radicand) {
            p.encode_int(0)?
        } else {
            radicand
        };
        let magnitude = p.sqrt(&radicand)?;
        if theta_deg >= 0 {
            Ok(magnitude)
        } else {
            p.neg(&magnitude)
        }
    }

    fn time_in_plot(&self, theta_deg: i32, v0x: &Fp, v0y: &Fp) -> Result<Fp, TrajectoryError> {
        let p = &self.params;
        let cfg = &self.cfg;
        let g = p.encode(cfg.g)?;
        let y0 = p.encode(cfg.y0)?;
        let y_min = p.encode(cfg.y_min)?;

        let drop = p.sub(&y_min, &y0)?;
        let two_g = p.mul_int(&g, 2)?;
        let radicand = p.sub(&p.mul(v0y, v0y)?, &p.mul(&two_g, &drop)?)?;
        if p.is_negative(&radicand) {
            return Err(TrajectoryError::DegenerateGeometry {
                radicand: p.decode(&radicand),
            });
        }
        let t_max_y = p.div(&p.add(v0y, &p.sqrt(&radicand)?)?, &g)?;

        match theta_deg.abs().cmp(&90) {
            Ordering::Equal => Ok(t_max_y),
            Ordering::Less => {
                let reach = p.sub(&p.encode(cfg.x_max)?, &p.encode(cfg.x0)?)?;
                let t_max_x = p.div(&reach, v0x)?;
                self.min_fp(t_max_x, t_max_y)
            }
            Ordering::Greater => {
                let reach = p.sub(&p.encode(cfg.x_min)?, &p.encode(cfg.x0)?)?;
                let t_max_x = p.div(&reach, v0x)?;
                self.min_fp(t_max_x, t_max_y)
            }
        }
    }

    fn min_fp(&self, a: Fp, b: Fp) -> Result<Fp, TrajectoryError> {
        if self.params.to_signed(&a) <= self.params.to_signed(&b) {
            Ok(a)
        } else {
            Ok(b)
        }
    }

    fn x_value(&self, x0: &Fp, v0x: &Fp, t: &Fp) -> Result<Fp, TrajectoryError> {
        self.params.add(x0, &self.params.mul(v0x, t)?)
    }

    fn y_value(&self, y0: &Fp, v0y: &Fp, half_g: &Fp, t: &Fp) -> Result<Fp, TrajectoryError> {
        let p = &self.params;
        let rise = p.mul(v0y, t)?;
        let fall = p.mul(&p.mul(half_g, t)?, t)?;
        p.sub(&p.add(y0, &rise)?, &fall)
    }

    /// Evenly spaced time residues over `[0, t_max]`, endpoints included.
    fn linspace(&self, t_max: &Fp, num: usize) -> Result<Vec<Fp>, TrajectoryError> {
        let p = &self.params;
        if num == 1 {
            return Ok(vec![p.encode_int(0)?]);
        }
        let last = (num - 1) as i64;
        (0..num)
            .map(|i| p.div_int(&p.mul_int(t_max, i as i64)?, last))
            .collect()
    }
}

impl TrajectoryEngine for FixedEngine {
    type Sample = Fp;

    fn projectile_path(
        &self,
        inputs: &LaunchInputs,
    ) -> Result<(Vec<Fp>, Vec<Fp>), TrajectoryError> {
        inputs.validate()?;
        let p = &self.params;
        let cfg = &self.cfg;
        let deg = inputs.theta_0_deg;

        // θ = deg · π / 180, in fixed point
        let theta = p.div_int(&p.mul_int(&p.pi_fp(), i64::from(deg))?, 180)?;

        let cos_theta = self.cosine_approx(&theta, deg)?;
        let sin_theta = self.sine_approx(deg, &cos_theta)?;

        let v0 = p.encode(inputs.v_0)?;
        let v0x = p.mul(&v0, &cos_theta)?;
        let v0y = p.mul(&v0, &sin_theta)?;

        let t_max = self.time_in_plot(deg, &v0x, &v0y)?;
        let times = self.linspace(&t_max, inputs.num_pts)?;

        let x0 = p.encode(cfg.x0)?;
        let y0 = p.encode(cfg.y0)?;
        let half_g = p.div_int(&p.encode(cfg.g)?, 2)?;

        let mut xs = Vec::with_capacity(times.len());
        let mut ys = Vec::with_capacity(times.len());
        for t in &times {
            xs.push(self.x_value(&x0, &v0x, t)?);
            ys.push(self.y_value(&y0, &v0y, &half_g, t)?);
        }
        Ok((xs, ys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(engine: &FixedEngine, values: &[Fp]) -> Vec<f64> {
        values.iter().map(|v| engine.params().decode(v)).collect()
    }

    #[test]
    fn test_single_point_path_is_origin() {
        let engine = FixedEngine::standard();
        let (xs, ys) = engine
            .projectile_path(&LaunchInputs::new(1, 0, 100.0))
            .unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(ys.len(), 1);
        assert_eq!(engine.params().decode(&xs[0]), 0.0);
        assert_eq!(engine.params().decode(&ys[0]), 0.0);
    }

    #[test]
    fn test_vertical_shot_x_is_exactly_zero() {
        let engine = FixedEngine::standard();
        let (xs, ys) = engine
            .projectile_path(&LaunchInputs::new(10, 90, 50.0))
            .unwrap();
        for x in &xs {
            assert_eq!(engine.params().decode(x), 0.0);
        }
        let decoded = decode_all(&engine, &ys);
        assert!(decoded.iter().any(|&y| y > 0.0));
    }

    #[test]
    fn test_fixed_cosine_matches_float_series() {
        let engine = FixedEngine::standard();
        let p = engine.params();
        for deg in [-179, -120, -90, -45, 0, 30, 60, 90, 105, 150, 180] {
            let theta = p
                .div_int(&p.mul_int(&p.pi_fp(), i64::from(deg)).unwrap(), 180)
                .unwrap();
            let cos_fp = engine.cosine_approx(&theta, deg).unwrap();
            let theta_f = crate::trig::degrees_to_radians(deg);
            let cos_f =
                crate::trig::cosine_approx(theta_f, deg, p.taylor_terms);
            assert!(
                (p.decode(&cos_fp) - cos_f).abs() < 1e-9,
                "cosine mismatch at {}°",
                deg
            );
        }
    }

    #[test]
    fn test_backward_shot_x_decreases() {
        let engine = FixedEngine::standard();
        let (xs, _) = engine
            .projectile_path(&LaunchInputs::new(20, 105, 100.0))
            .unwrap();
        let decoded = decode_all(&engine, &xs);
        assert_eq!(decoded[0], 0.0);
        for w in decoded.windows(2) {
            assert!(w[0] > w[1], "x must strictly decrease for a 105° launch");
        }
    }

    #[test]
    fn test_rejects_invalid_inputs_before_computing() {
        let engine = FixedEngine::standard();
        for bad in [
            LaunchInputs::new(0, 0, 100.0),
            LaunchInputs::new(20, 181, 100.0),
            LaunchInputs::new(20, 0, 0.0),
        ] {
            assert!(matches!(
                engine.projectile_path(&bad),
                Err(TrajectoryError::InvalidInput { .. })
            ));
        }
    }
}
