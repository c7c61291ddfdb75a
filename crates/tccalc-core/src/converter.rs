//! Unit-value (sample count) to frame-number conversion.
//!
//! Both clocks are assumed to start at zero together, so a unit count maps to
//! `floor(unit_value * nominal_rate / unit_rate)` frames. SMPTE ST 12-1 only
//! asks for "sufficient precision", so the arithmetic is pluggable.

use tracing::trace;

use crate::error::{Result, TimecodeError};
use crate::rational::Rational;

/// Derives a frame count from a count at some other clock rate.
pub trait FrameRateConverter {
    fn unit_to_frames(
        &self,
        unit_value: u64,
        unit_rate: Rational,
        nominal_rate: Rational,
    ) -> Result<i64>;
}

/// Single-precision float conversion.
///
/// This reproduces the frame numbers reported by DAWs such as Pro Tools for
/// 48 kHz sessions, including rounding of large sample counts to the nearest
/// representable `f32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatConverter;

impl FrameRateConverter for FloatConverter {
    fn unit_to_frames(
        &self,
        unit_value: u64,
        unit_rate: Rational,
        nominal_rate: Rational,
    ) -> Result<i64> {
        let unit_rate = positive(unit_rate)?;
        let fps = positive(nominal_rate)?.to_f32();

        let units_per_frame = unit_rate.to_f32() / fps;
        let frames = (unit_value as f32 / units_per_frame) as i64;

        trace!(unit_value, units_per_frame, frames, "float unit conversion");
        Ok(frames)
    }
}

/// Exact conversion in 128-bit integer arithmetic, truncating toward zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RationalConverter;

impl FrameRateConverter for RationalConverter {
    fn unit_to_frames(
        &self,
        unit_value: u64,
        unit_rate: Rational,
        nominal_rate: Rational,
    ) -> Result<i64> {
        let unit_rate = positive(unit_rate)?;
        let nominal_rate = positive(nominal_rate)?;

        let numerator = i128::from(unit_value)
            .checked_mul(i128::from(nominal_rate.numerator))
            .and_then(|n| n.checked_mul(i128::from(unit_rate.denominator)))
            .ok_or(TimecodeError::Overflow)?;
        let denominator = i128::from(unit_rate.numerator)
            .checked_mul(i128::from(nominal_rate.denominator))
            .ok_or(TimecodeError::Overflow)?;

        let frames = i64::try_from(numerator / denominator).map_err(|_| TimecodeError::Overflow)?;

        trace!(unit_value, frames, "exact unit conversion");
        Ok(frames)
    }
}

/// A rate used as a divisor must be strictly positive.
fn positive(rate: Rational) -> Result<Rational> {
    let rate = rate.validate()?;
    if rate.is_zero() || (rate.numerator < 0) != (rate.denominator < 0) {
        return Err(TimecodeError::InvalidRational {
            numerator: rate.numerator,
            denominator: rate.denominator,
        });
    }
    Ok(rate)
}
