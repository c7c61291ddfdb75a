//! Exact ratios for frame rates and unit (sample) rates.
//!
//! Rates are stored as numerator/denominator pairs so that table entries such
//! as 30000/1001 never drift. Floating-point views are provided for the
//! derived math that SMPTE ST 12-1 leaves to "sufficient precision".

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TimecodeError};

/// A rate expressed as `numerator / denominator`.
///
/// Fields are public so table constants and deserialized values can be built
/// directly; anything that reaches arithmetic goes through [`Rational::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    /// Create a rational, rejecting a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::from_parts(numerator, denominator).validate()
    }

    /// Build without validation. Used for the compile-time rate table.
    #[inline]
    pub(crate) const fn from_parts(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Shorthand for `n/1`.
    #[inline]
    pub const fn integer(numerator: i64) -> Self {
        Self::from_parts(numerator, 1)
    }

    /// Return `self` if it can be used for computation.
    pub fn validate(self) -> Result<Self> {
        if self.denominator == 0 {
            return Err(TimecodeError::InvalidRational {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(self)
    }

    /// Double-precision approximation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Single-precision approximation, as used by [`crate::FloatConverter`].
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// Exact reduced value.
    pub fn to_ratio(self) -> Result<Rational64> {
        let valid = self.validate()?;
        Ok(Rational64::new(valid.numerator, valid.denominator))
    }

    /// Nearest integer, e.g. 30 for 30000/1001.
    pub fn round(self) -> Result<i64> {
        Ok(self.to_ratio()?.round().to_integer())
    }

    pub fn is_zero(self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `"48000/1"` or a bare integer `"48000"` (read as `48000/1`).
impl FromStr for Rational {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| TimecodeError::malformed(format!("wrong edit rate format: {s:?}")))
        };

        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Self::new(parse(s)?, 1),
        }
    }
}
