//! Structured time <-> absolute frame count, including drop-frame counting.
//!
//! SMPTE ST 12-1: to keep NTSC timecode close to real time, the first frame
//! labels of each minute are omitted from the count, except for minutes 00,
//! 10, 20, 30, 40 and 50. Two labels (00, 01) are omitted at 29.97 fps and
//! four (00-03) at 59.94 fps. Frame counts are always contiguous; only the
//! labels skip.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, TimecodeError};
use crate::format::FrameRateFormat;

/// Hours, minutes, seconds and frames of a timecode label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hmsf {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Hmsf {
    #[inline]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }
}

/// Constants for one format's counting pattern.
#[derive(Debug, Clone, Copy)]
struct Counting {
    fps: i64,
    /// Labels skipped per non-tenth minute; 0 for non-drop formats.
    drop: i64,
}

impl Counting {
    fn of(format: FrameRateFormat) -> Result<Self> {
        Ok(Self {
            fps: format.nominal_fps()?,
            drop: format.dropped_per_minute()?,
        })
    }

    fn frames_per_minute(self) -> i64 {
        self.fps * 60 - self.drop
    }

    fn frames_per_10_minutes(self) -> i64 {
        self.frames_per_minute() * 10 + self.drop
    }

    fn frames_per_day(self) -> i64 {
        self.frames_per_10_minutes() * 6 * 24
    }
}

/// Number of distinct frame counts in 24 hours of `format`.
///
/// 2 589 408 at 29.97 DF, 2 592 000 at 30 fps.
pub fn frames_per_day(format: FrameRateFormat) -> Result<i64> {
    Ok(Counting::of(format)?.frames_per_day())
}

/// Absolute frame count of a label.
///
/// Fields are not range checked; out-of-range values carry forward into the
/// frame count.
pub fn hmsf_to_frames(hmsf: Hmsf, format: FrameRateFormat) -> Result<i64> {
    let Counting { fps, drop } = Counting::of(format)?;
    let hours = i64::from(hmsf.hours);
    let minutes = i64::from(hmsf.minutes);

    // Labels already skipped before the current minute. The current minute's
    // own skip needs no correction because counting starts at label 00.
    let dropped = drop * (hours * 9 * 6 + (minutes / 10) * 9 + minutes % 10);

    Ok(hours * 3600 * fps
        + minutes * 60 * fps
        + i64::from(hmsf.seconds) * fps
        + i64::from(hmsf.frames)
        - dropped)
}

/// Label of an absolute frame count.
///
/// Only the magnitude of `frame_number` is decomposed. With `rollover` the
/// count wraps at 24 hours, otherwise hours grow without bound.
pub fn frames_to_hmsf(frame_number: i64, format: FrameRateFormat, rollover: bool) -> Result<Hmsf> {
    let counting = Counting::of(format)?;
    let fps = counting.fps;
    let mut n = frame_number.checked_abs().ok_or(TimecodeError::Overflow)?;

    if rollover {
        n %= counting.frames_per_day();
    }

    if counting.drop > 0 {
        let drop = counting.drop;
        let per_minute = counting.frames_per_minute();
        let per_10_minutes = counting.frames_per_10_minutes();

        let chunks_of_10_minutes = n / per_10_minutes;
        // The first minute of each block keeps its leading labels, hence the offset.
        let chunks_of_1_minute = (n % per_10_minutes - drop) / per_minute;

        let ten_minute_drops = drop * 9 * chunks_of_10_minutes;
        let one_minute_drops = drop * chunks_of_1_minute.max(0);
        let dropped = ten_minute_drops + one_minute_drops;

        trace!(
            frame_number = n,
            chunks_of_10_minutes,
            chunks_of_1_minute,
            dropped,
            "reconstructed dropped labels"
        );
        n = n.checked_add(dropped).ok_or(TimecodeError::Overflow)?;
    }

    let total_seconds = n / fps;
    let hours = u32::try_from(total_seconds / 3600).map_err(|_| TimecodeError::Overflow)?;

    Ok(Hmsf {
        hours,
        minutes: ((total_seconds / 60) % 60) as u32,
        seconds: (total_seconds % 60) as u32,
        frames: (n % fps) as u32,
    })
}
