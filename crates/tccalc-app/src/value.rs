//! Turning command-line values into timecodes.

use anyhow::{bail, Context, Result};
use tccalc_core::text::looks_like_timecode;
use tccalc_core::{FrameRateFormat, Rational, Timecode};
use tracing::debug;

/// How a command-line value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `hh:mm:ss:ff`
    Label,
    /// Count at an explicit edit rate.
    Units(u64),
    /// Frame count at the format's rate.
    Frames(u64),
}

/// Decide how `value` should be read. Digit strings are unit counts when an
/// edit rate was given and frame counts otherwise.
pub fn classify(value: &str, has_rate: bool) -> Result<ValueKind> {
    if looks_like_timecode(value) {
        return Ok(ValueKind::Label);
    }

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        let count: u64 = value
            .parse()
            .with_context(|| format!("Timecode value {value:?} is too large"))?;
        return Ok(if has_rate {
            ValueKind::Units(count)
        } else {
            ValueKind::Frames(count)
        });
    }

    bail!("Wrong timecode value format: {value:?}")
}

/// Build a timecode from a command-line value.
pub fn build_timecode(
    value: &str,
    format: FrameRateFormat,
    rate: Option<Rational>,
    strict: bool,
) -> Result<Timecode> {
    let kind = classify(value, rate.is_some())?;
    debug!(value, ?kind, "classified input");

    let tc = match (kind, rate) {
        (ValueKind::Label, _) if strict => Timecode::from_string_strict(value, format)?,
        (ValueKind::Label, _) => Timecode::from_string(value, format)?,
        (ValueKind::Units(units), Some(rate)) => Timecode::from_unit_value(units, rate, format)?,
        (ValueKind::Units(frames), None) | (ValueKind::Frames(frames), _) => {
            Timecode::from_frames(frames, format)?
        }
    };
    Ok(tc)
}

/// Parse a format name, pointing at `--list` on failure.
pub fn parse_format(name: &str) -> Result<FrameRateFormat> {
    name.parse::<FrameRateFormat>()
        .with_context(|| format!("Unsupported timecode format {name:?}, see tccalc -l"))
}
