//! tccalc core - SMPTE timecode conversion and arithmetic
//!
//! This crate provides:
//! - Exact frame and unit rates (Rational)
//! - The fixed table of supported timecode formats
//! - Drop-frame aware label <-> frame count conversion with 24h rollover
//! - Sample count to frame count conversion
//! - The Timecode value type with add, subtract and format conversion

pub mod converter;
pub mod dropframe;
pub mod error;
pub mod format;
pub mod rational;
pub mod text;
pub mod timecode;

pub use converter::{FloatConverter, FrameRateConverter, RationalConverter};
pub use dropframe::{frames_per_day, frames_to_hmsf, hmsf_to_frames, Hmsf};
pub use error::{Result, TimecodeError};
pub use format::{is_drop_frame, rate_of, FrameRateFormat};
pub use rational::Rational;
pub use timecode::Timecode;
