//! Rendering and parsing of `hh:mm:ss:ff` labels.

use crate::dropframe::Hmsf;
use crate::error::{Result, TimecodeError};
use crate::format::FrameRateFormat;

/// Separator between timecode fields.
pub const SEPARATOR: char = ':';

/// Separator before the frame field in drop-frame formats.
pub const DROP_SEPARATOR: char = ';';

/// Render a label as `hh:mm:ss:ff` (`hh:mm:ss;ff` for drop-frame formats).
///
/// Fields are zero padded to two digits and may be wider. `negative`
/// prepends a `-`.
pub fn render(hmsf: Hmsf, format: FrameRateFormat, negative: bool) -> String {
    let frame_separator = if format.is_drop_frame() {
        DROP_SEPARATOR
    } else {
        SEPARATOR
    };

    format!(
        "{sign}{:02}{SEPARATOR}{:02}{SEPARATOR}{:02}{frame_separator}{:02}",
        hmsf.hours,
        hmsf.minutes,
        hmsf.seconds,
        hmsf.frames,
        sign = if negative { "-" } else { "" },
    )
}

/// Parse four decimal fields separated by any single non-digit character.
///
/// Field ranges and separator characters are not checked, so `00:00:00:90`
/// at 30 fps is accepted and later counts as three seconds.
pub fn parse_lenient(text: &str) -> Result<Hmsf> {
    scan(text).map(|(hmsf, _)| hmsf)
}

/// Parse a label that must be valid for `format`.
///
/// Requires `:` separators (`;` before the frames of drop-frame formats),
/// hours below 24, minutes and seconds below 60, frames below the nominal
/// rate, and rejects the labels that drop-frame counting skips.
pub fn parse_strict(text: &str, format: FrameRateFormat) -> Result<Hmsf> {
    let fps = format.nominal_fps()?;
    let (hmsf, separators) = scan(text)?;

    let frame_separator = if format.is_drop_frame() {
        DROP_SEPARATOR
    } else {
        SEPARATOR
    };
    if separators != [SEPARATOR, SEPARATOR, frame_separator] {
        return Err(TimecodeError::malformed(format!(
            "expected hh{SEPARATOR}mm{SEPARATOR}ss{frame_separator}ff for {format}, got {text:?}"
        )));
    }

    check_range("hours", hmsf.hours, 23)?;
    check_range("minutes", hmsf.minutes, 59)?;
    check_range("seconds", hmsf.seconds, 59)?;
    check_range("frames", hmsf.frames, fps as u32 - 1)?;

    let drop = format.dropped_per_minute()? as u32;
    if hmsf.seconds == 0 && hmsf.minutes % 10 != 0 && hmsf.frames < drop {
        return Err(TimecodeError::malformed(format!(
            "{text:?} is skipped by drop-frame counting"
        )));
    }

    Ok(hmsf)
}

/// Whether `text` has the shape of a two-digit-field label (`hh?mm?ss?ff`).
///
/// Used to tell labels apart from plain frame or sample counts.
pub fn looks_like_timecode(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 11
        && [0, 1, 3, 4, 6, 7, 9, 10]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

fn check_range(component: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(TimecodeError::InvalidComponent {
            component,
            value,
            max,
        });
    }
    Ok(())
}

/// Split `text` into four numeric fields and the three separators between them.
fn scan(text: &str) -> Result<(Hmsf, [char; 3])> {
    let malformed = || TimecodeError::malformed(format!("expected hh:mm:ss:ff, got {text:?}"));

    let mut rest = text.trim();
    let mut fields = [0u32; 4];
    let mut separators = [SEPARATOR; 3];

    for (i, field) in fields.iter_mut().enumerate() {
        if i > 0 {
            let mut chars = rest.chars();
            let sep = chars.next().filter(|c| !c.is_ascii_digit()).ok_or_else(malformed)?;
            separators[i - 1] = sep;
            rest = chars.as_str();
        }

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return Err(malformed());
        }
        *field = rest[..end].parse().map_err(|_| malformed())?;
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        return Err(malformed());
    }

    let [hours, minutes, seconds, frames] = fields;
    Ok((Hmsf::new(hours, minutes, seconds, frames), separators))
}
