//! The fixed table of supported timecode formats.
//!
//! Each format pairs a nominal frame rate with a counting mode. The 29.97 and
//! 59.94 families appear twice, once per counting mode, sharing one rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TimecodeError};
use crate::rational::Rational;

/// Timecode format: nominal frame rate plus drop-frame behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameRateFormat {
    /// Placeholder with a 0/1 rate. Never valid for arithmetic.
    #[default]
    Unknown,
    Fps23_976,
    Fps24,
    Fps25,
    Fps29_97Ndf,
    Fps29_97Df,
    Fps30,
    Fps47_95,
    Fps48,
    Fps50,
    Fps59_94Ndf,
    Fps59_94Df,
    Fps60,
    Fps72,
    Fps96,
    Fps100,
    Fps120,
}

struct FormatEntry {
    rate: Rational,
    drop_frame: bool,
    name: &'static str,
}

const fn entry(
    numerator: i64,
    denominator: i64,
    drop_frame: bool,
    name: &'static str,
) -> FormatEntry {
    FormatEntry {
        rate: Rational::from_parts(numerator, denominator),
        drop_frame,
        name,
    }
}

/// Indexed by `FrameRateFormat as usize`.
const FORMAT_TABLE: [FormatEntry; 17] = [
    entry(0, 1, false, "unknown"),
    entry(24000, 1001, false, "23.976"),
    entry(24, 1, false, "24"),
    entry(25, 1, false, "25"),
    entry(30000, 1001, false, "29.97NDF"),
    entry(30000, 1001, true, "29.97DF"),
    entry(30, 1, false, "30"),
    entry(48000, 1001, false, "47.95"),
    entry(48, 1, false, "48"),
    entry(50, 1, false, "50"),
    entry(60000, 1001, false, "59.94NDF"),
    entry(60000, 1001, true, "59.94DF"),
    entry(60, 1, false, "60"),
    entry(72, 1, false, "72"),
    entry(96, 1, false, "96"),
    entry(100, 1, false, "100"),
    entry(120, 1, false, "120"),
];

/// Nominal rate of `format`. `Unknown` yields 0/1.
#[inline]
pub fn rate_of(format: FrameRateFormat) -> Rational {
    FORMAT_TABLE[format as usize].rate
}

/// Whether `format` counts with drop-frame labels.
#[inline]
pub fn is_drop_frame(format: FrameRateFormat) -> bool {
    FORMAT_TABLE[format as usize].drop_frame
}

impl FrameRateFormat {
    /// Every tabulated format, in table order.
    pub const ALL: [Self; 16] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97Ndf,
        Self::Fps29_97Df,
        Self::Fps30,
        Self::Fps47_95,
        Self::Fps48,
        Self::Fps50,
        Self::Fps59_94Ndf,
        Self::Fps59_94Df,
        Self::Fps60,
        Self::Fps72,
        Self::Fps96,
        Self::Fps100,
        Self::Fps120,
    ];

    #[inline]
    pub fn rate(self) -> Rational {
        rate_of(self)
    }

    #[inline]
    pub fn is_drop_frame(self) -> bool {
        is_drop_frame(self)
    }

    /// Short name as accepted on the command line, e.g. `"29.97DF"`.
    #[inline]
    pub fn name(self) -> &'static str {
        FORMAT_TABLE[self as usize].name
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Return `self` unless it is the `Unknown` placeholder.
    pub fn known(self) -> Result<Self> {
        if self.is_known() {
            Ok(self)
        } else {
            Err(TimecodeError::UnknownFormat(self.name().to_string()))
        }
    }

    /// Integer frames per second used for label arithmetic (30 for 29.97).
    pub fn nominal_fps(self) -> Result<i64> {
        self.known()?.rate().round()
    }

    /// Frame labels skipped at the start of each non-tenth minute:
    /// 2 for 29.97 DF, 4 for 59.94 DF, 0 otherwise.
    pub fn dropped_per_minute(self) -> Result<i64> {
        let fps = self.nominal_fps()?;
        Ok(if self.is_drop_frame() { 2 * fps / 30 } else { 0 })
    }

    /// Look up a format from a floating frame rate.
    ///
    /// Rates are compared after rounding to two decimal places, so 29.97
    /// matches 30000/1001. When `drop` is requested and the rate belongs to a
    /// family with a drop-frame variant, that variant is returned.
    pub fn from_fps(fps: f64, drop: bool) -> Result<Self> {
        let wanted = (fps * 100.0).round() as i64;
        let found = Self::ALL
            .iter()
            .copied()
            .find(|f| !f.is_drop_frame() && (f.rate().to_f64() * 100.0).round() as i64 == wanted)
            .ok_or_else(|| TimecodeError::UnknownFormat(format!("{fps} fps")))?;

        Ok(match (found, drop) {
            (Self::Fps29_97Ndf, true) => Self::Fps29_97Df,
            (Self::Fps59_94Ndf, true) => Self::Fps59_94Df,
            (other, _) => other,
        })
    }
}

impl fmt::Display for FrameRateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameRateFormat {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| TimecodeError::UnknownFormat(s.to_string()))
    }
}
