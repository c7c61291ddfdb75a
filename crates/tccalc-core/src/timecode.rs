//! The `Timecode` value: one instant in every representation at once.
//!
//! A timecode is built from exactly one source (text, frame count, label
//! fields, or a unit count at some rate) and afterwards changed in place by
//! arithmetic and format conversion. The frame count, label fields and
//! rendered string always agree.
//!
//! `unit_value` and `unit_rate` describe the construction input only.
//! Arithmetic and conversion leave them untouched, so they go stale once the
//! value has been mutated.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::converter::{FloatConverter, FrameRateConverter};
use crate::dropframe::{frames_to_hmsf, hmsf_to_frames, Hmsf};
use crate::error::{Result, TimecodeError};
use crate::format::FrameRateFormat;
use crate::rational::Rational;
use crate::text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timecode {
    format: FrameRateFormat,
    frame_number: i64,
    #[serde(flatten)]
    hmsf: Hmsf,
    unit_value: u64,
    unit_rate: Rational,
    no_rollover: bool,
    string: String,
}

impl Timecode {
    fn blank(format: FrameRateFormat) -> Result<Self> {
        Ok(Self {
            format: format.known()?,
            frame_number: 0,
            hmsf: Hmsf::default(),
            unit_value: 0,
            unit_rate: format.rate(),
            no_rollover: false,
            string: String::new(),
        })
    }

    /// Build from a label such as `"01:02:03:04"`.
    ///
    /// Any single non-digit separates fields and field ranges are not
    /// checked; see [`text::parse_lenient`]. The label is kept as given and
    /// the frame count derived from it.
    pub fn from_string(label: &str, format: FrameRateFormat) -> Result<Self> {
        let mut tc = Self::blank(format)?;
        tc.hmsf = text::parse_lenient(label)?;
        tc.frames_from_label()?;
        debug!(label, format = %format, frame_number = tc.frame_number, "timecode from string");
        Ok(tc)
    }

    /// Like [`Timecode::from_string`] but rejects labels that are not valid for `format`.
    pub fn from_string_strict(label: &str, format: FrameRateFormat) -> Result<Self> {
        let mut tc = Self::blank(format)?;
        tc.hmsf = text::parse_strict(label, format)?;
        tc.frames_from_label()?;
        Ok(tc)
    }

    /// Build from an absolute frame count.
    ///
    /// The unit fields record the frame count at the format's own rate.
    pub fn from_frames(frame_number: u64, format: FrameRateFormat) -> Result<Self> {
        let mut tc = Self::blank(format)?;
        tc.frame_number = i64::try_from(frame_number).map_err(|_| TimecodeError::Overflow)?;
        tc.unit_value = frame_number;
        tc.label_from_frames()?;
        debug!(frame_number, format = %format, label = %tc.string, "timecode from frames");
        Ok(tc)
    }

    /// Build from label fields. Ranges are not checked.
    pub fn from_hmsf(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        format: FrameRateFormat,
    ) -> Result<Self> {
        let mut tc = Self::blank(format)?;
        tc.hmsf = Hmsf::new(hours, minutes, seconds, frames);
        tc.frames_from_label()?;
        Ok(tc)
    }

    /// Build from a count at another clock rate, e.g. audio samples at 48000/1.
    pub fn from_unit_value(
        unit_value: u64,
        unit_rate: Rational,
        format: FrameRateFormat,
    ) -> Result<Self> {
        Self::from_unit_value_with(&FloatConverter, unit_value, unit_rate, format)
    }

    /// [`Timecode::from_unit_value`] with a caller-chosen conversion.
    pub fn from_unit_value_with(
        converter: &impl FrameRateConverter,
        unit_value: u64,
        unit_rate: Rational,
        format: FrameRateFormat,
    ) -> Result<Self> {
        let unit_rate = unit_rate.validate()?;
        let mut tc = Self::blank(format)?;
        tc.unit_value = unit_value;
        tc.unit_rate = unit_rate;
        tc.frame_number = converter.unit_to_frames(unit_value, unit_rate, format.rate())?;
        tc.label_from_frames()?;
        debug!(
            unit_value,
            unit_rate = %unit_rate,
            frame_number = tc.frame_number,
            label = %tc.string,
            "timecode from unit value"
        );
        Ok(tc)
    }

    /// Owned form of [`Timecode::set_no_rollover`].
    pub fn with_no_rollover(mut self, no_rollover: bool) -> Result<Self> {
        self.set_no_rollover(no_rollover)?;
        Ok(self)
    }

    /// Choose whether labels wrap at 24 hours, re-deriving the label from the
    /// frame count.
    pub fn set_no_rollover(&mut self, no_rollover: bool) -> Result<()> {
        self.update(|tc| {
            tc.no_rollover = no_rollover;
            tc.label_from_frames()
        })
    }

    /// Add `other`'s frame count. Both must share a format.
    pub fn add(&mut self, other: &Timecode) -> Result<()> {
        let delta = self.same_format(other)?;
        self.shift(self.frame_number.checked_add(delta))
    }

    /// Subtract `other`'s frame count. Both must share a format.
    ///
    /// The result may be negative; its label shows the magnitude with a
    /// leading `-`.
    pub fn sub(&mut self, other: &Timecode) -> Result<()> {
        let delta = self.same_format(other)?;
        self.shift(self.frame_number.checked_sub(delta))
    }

    /// Keep the frame count, relabel it at `format`'s rate.
    ///
    /// The real-time duration changes with the rate.
    pub fn convert(&mut self, format: FrameRateFormat) -> Result<()> {
        let format = format.known()?;
        self.update(|tc| {
            tc.format = format;
            tc.label_from_frames()
        })?;
        debug!(format = %format, label = %self.string, "converted keeping frame count");
        Ok(())
    }

    /// Keep the label digits, recount them at `format`'s rate.
    ///
    /// Not the inverse of [`Timecode::convert`].
    pub fn convert_frames(&mut self, format: FrameRateFormat) -> Result<()> {
        let format = format.known()?;
        self.update(|tc| {
            tc.format = format;
            tc.frames_from_label()
        })?;
        debug!(format = %format, frame_number = self.frame_number, "converted keeping label");
        Ok(())
    }

    #[inline]
    pub fn format(&self) -> FrameRateFormat {
        self.format
    }

    #[inline]
    pub fn frame_number(&self) -> i64 {
        self.frame_number
    }

    #[inline]
    pub fn hmsf(&self) -> Hmsf {
        self.hmsf
    }

    #[inline]
    pub fn hours(&self) -> u32 {
        self.hmsf.hours
    }

    #[inline]
    pub fn minutes(&self) -> u32 {
        self.hmsf.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u32 {
        self.hmsf.seconds
    }

    #[inline]
    pub fn frames(&self) -> u32 {
        self.hmsf.frames
    }

    /// Construction-time unit count. Stale after arithmetic or conversion.
    #[inline]
    pub fn unit_value(&self) -> u64 {
        self.unit_value
    }

    /// Construction-time unit rate. Stale after arithmetic or conversion.
    #[inline]
    pub fn unit_rate(&self) -> Rational {
        self.unit_rate
    }

    #[inline]
    pub fn no_rollover(&self) -> bool {
        self.no_rollover
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.frame_number < 0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    fn same_format(&self, other: &Timecode) -> Result<i64> {
        if self.format != other.format {
            return Err(TimecodeError::FormatMismatch {
                left: self.format.to_string(),
                right: other.format.to_string(),
            });
        }
        Ok(other.frame_number)
    }

    fn shift(&mut self, frame_number: Option<i64>) -> Result<()> {
        let frame_number = frame_number.ok_or(TimecodeError::Overflow)?;
        self.update(|tc| {
            tc.frame_number = frame_number;
            tc.label_from_frames()
        })?;
        debug!(frame_number, label = %self.string, "timecode arithmetic");
        Ok(())
    }

    /// Apply `change` to a copy and commit only if it succeeds.
    fn update(&mut self, change: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let mut next = self.clone();
        change(&mut next)?;
        *self = next;
        Ok(())
    }

    fn label_from_frames(&mut self) -> Result<()> {
        self.hmsf = frames_to_hmsf(self.frame_number, self.format, !self.no_rollover)?;
        self.render();
        Ok(())
    }

    fn frames_from_label(&mut self) -> Result<()> {
        self.frame_number = hmsf_to_frames(self.hmsf, self.format)?;
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        self.string = text::render(self.hmsf, self.format, self.is_negative());
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl AsRef<str> for Timecode {
    fn as_ref(&self) -> &str {
        &self.string
    }
}
