//! Fixed-point codec over a prime field.
//!
//! A real `r` is stored as the residue `round(r * SCALE_FP) mod PRIME`.
//! Residues at or below `HALF_PRIME` are non-negative; anything above wraps
//! around and decodes as negative. The wraparound convention lives entirely
//! in this module: arithmetic converts residues to signed representatives,
//! operates on those, and re-encodes, range-checking every result so an
//! unrepresentable magnitude fails instead of silently aliasing.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Roots;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use crate::error::TrajectoryError;
use crate::params::FixedPointParams;

/// A fixed-point value held as a field residue in `[0, PRIME)`.
///
/// Construction goes through [`FixedPointParams::encode`] (or the other
/// codec operations), so every live `Fp` has passed the range check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fp(pub(crate) BigUint);

impl Fp {
    /// The raw field residue.
    pub fn raw(&self) -> &BigUint {
        &self.0
    }

    pub fn into_raw(self) -> BigUint {
        self.0
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FixedPointParams {
    /// Scale `value`, round to nearest, and reduce modulo the prime.
    ///
    /// Fails with [`TrajectoryError::EncodingOverflow`] when the scaled
    /// magnitude exceeds the range-check bound.
    pub fn encode(&self, value: f64) -> Result<Fp, TrajectoryError> {
        if !value.is_finite() {
            return Err(TrajectoryError::InvalidInput {
                parameter: "value",
                message: format!("cannot encode non-finite value {}", value),
            });
        }
        let scaled = (value * self.scale_as_f64()).round();
        let scaled = BigInt::from_f64(scaled).ok_or_else(|| TrajectoryError::InvalidInput {
            parameter: "value",
            message: format!("cannot encode {}", value),
        })?;
        self.from_signed(scaled)
    }

    /// Encode an integer exactly (no floating-point rounding on the way in).
    pub fn encode_int(&self, value: i64) -> Result<Fp, TrajectoryError> {
        self.from_signed(BigInt::from(value) * BigInt::from(self.scale.clone()))
    }

    /// Apply the half-modulus sign rule and divide by the scale factor.
    pub fn decode(&self, value: &Fp) -> f64 {
        self.to_signed(value).to_f64().unwrap_or(f64::NAN) / self.scale_as_f64()
    }

    /// Signed scaled representative of a residue: residues above
    /// `half_prime` map below zero.
    pub fn to_signed(&self, value: &Fp) -> BigInt {
        if value.0 <= self.half_prime {
            BigInt::from(value.0.clone())
        } else {
            BigInt::from(value.0.clone()) - BigInt::from(self.prime.clone())
        }
    }

    /// Reduce a signed scaled integer into the field, range-checking first.
    pub fn from_signed(&self, value: BigInt) -> Result<Fp, TrajectoryError> {
        if value.magnitude() > &self.range_check_bound {
            return Err(TrajectoryError::EncodingOverflow { magnitude: value });
        }
        let residue = match value.sign() {
            Sign::Minus => &self.prime - value.magnitude(),
            _ => value.magnitude().clone(),
        };
        Ok(Fp(residue))
    }

    pub fn is_negative(&self, value: &Fp) -> bool {
        value.0 > self.half_prime
    }

    pub fn add(&self, a: &Fp, b: &Fp) -> Result<Fp, TrajectoryError> {
        self.from_signed(self.to_signed(a) + self.to_signed(b))
    }

    pub fn sub(&self, a: &Fp, b: &Fp) -> Result<Fp, TrajectoryError> {
        self.from_signed(self.to_signed(a) - self.to_signed(b))
    }

    pub fn neg(&self, a: &Fp) -> Result<Fp, TrajectoryError> {
        self.from_signed(-self.to_signed(a))
    }

    /// Product of two fixed-point values, rescaled back down by the scale
    /// factor. The intermediate double-width product is never range-checked;
    /// only the rescaled result is.
    pub fn mul(&self, a: &Fp, b: &Fp) -> Result<Fp, TrajectoryError> {
        let product = self.to_signed(a) * self.to_signed(b);
        self.from_signed(product / BigInt::from(self.scale.clone()))
    }

    /// Quotient of two fixed-point values, with the numerator pre-scaled so
    /// the result stays in fixed point.
    pub fn div(&self, a: &Fp, b: &Fp) -> Result<Fp, TrajectoryError> {
        let divisor = self.to_signed(b);
        if divisor.is_zero() {
            return Err(TrajectoryError::InvalidInput {
                parameter: "divisor",
                message: "fixed-point division by zero".to_string(),
            });
        }
        let numerator = self.to_signed(a) * BigInt::from(self.scale.clone());
        self.from_signed(numerator / divisor)
    }

    /// Multiply by a plain integer (no rescale).
    pub fn mul_int(&self, a: &Fp, k: i64) -> Result<Fp, TrajectoryError> {
        self.from_signed(self.to_signed(a) * k)
    }

    /// Divide by a plain integer (no rescale).
    pub fn div_int(&self, a: &Fp, k: i64) -> Result<Fp, TrajectoryError> {
        if k == 0 {
            return Err(TrajectoryError::InvalidInput {
                parameter: "divisor",
                message: "fixed-point division by zero".to_string(),
            });
        }
        self.from_signed(self.to_signed(a) / k)
    }

    /// Square root of a non-negative fixed-point value.
    ///
    /// `sqrt(r · S) · sqrt(S) = sqrt(r) · S`, and `sqrt(S)` is exactly
    /// `scale_sqrt`, so the result is the integer square root of the raw
    /// value times `scale_sqrt`. Accurate to one unit of
    /// `scale_sqrt / scale`.
    pub fn sqrt(&self, a: &Fp) -> Result<Fp, TrajectoryError> {
        let signed = self.to_signed(a);
        if signed.is_negative() {
            return Err(TrajectoryError::InvalidInput {
                parameter: "radicand",
                message: format!("square root of negative fixed-point value {}", signed),
            });
        }
        let root = signed.magnitude().sqrt() * &self.scale_sqrt;
        self.from_signed(BigInt::from(root))
    }

    pub(crate) fn scale_as_f64(&self) -> f64 {
        self.scale.to_f64().unwrap_or(f64::INFINITY)
    }

    pub(crate) fn pi_fp(&self) -> Fp {
        Fp(self.pi.clone())
    }
}
