//! Integration tests for timecode addition and subtraction.

use tccalc_core::{FrameRateFormat, Hmsf, Timecode, TimecodeError};

// ── Helpers ────────────────────────────────────────────────────

fn df(label: &str) -> Timecode {
    Timecode::from_string(label, FrameRateFormat::Fps29_97Df).unwrap()
}

fn pal(label: &str) -> Timecode {
    Timecode::from_string(label, FrameRateFormat::Fps25).unwrap()
}

// ── Addition ───────────────────────────────────────────────────

#[test]
fn add_drop_frame_durations() {
    let mut tc = df("01:02:03:04");
    tc.add(&df("02:10:01:07")).unwrap();
    assert_eq!(tc.as_str(), "03:12:04;11");
}

#[test]
fn add_across_a_dropped_minute() {
    let mut tc = df("00:00:59:29");
    tc.add(&Timecode::from_frames(1, FrameRateFormat::Fps29_97Df).unwrap())
        .unwrap();
    assert_eq!(tc.as_str(), "00:01:00;02");
}

#[test]
fn add_past_midnight_rolls_over_unless_disabled() {
    let one = Timecode::from_frames(1, FrameRateFormat::Fps29_97Df).unwrap();

    let mut rolled = df("23:59:59:29");
    rolled.add(&one).unwrap();
    assert_eq!(rolled.as_str(), "00:00:00;00");

    let mut unbounded = df("23:59:59:29").with_no_rollover(true).unwrap();
    unbounded.add(&one).unwrap();
    assert_eq!(unbounded.as_str(), "24:00:00;00");
    assert_eq!(unbounded.frame_number(), 2_589_408);
}

// ── Subtraction ────────────────────────────────────────────────

#[test]
fn subtract_to_zero() {
    let mut tc = pal("10:00:00:00");
    tc.sub(&pal("10:00:00:00")).unwrap();
    assert_eq!(tc.frame_number(), 0);
    assert_eq!(tc.as_str(), "00:00:00:00");
}

#[test]
fn subtract_larger_gives_signed_magnitude() {
    let mut tc = pal("00:00:01:00");
    tc.sub(&pal("01:00:00:00")).unwrap();

    assert_eq!(tc.frame_number(), 25 - 90_000);
    assert!(tc.is_negative());
    assert_eq!(tc.as_str(), "-00:59:59:00");
    assert_eq!(tc.hmsf(), Hmsf::new(0, 59, 59, 0));
}

#[test]
fn negative_then_positive_again() {
    let mut tc = pal("00:00:00:00");
    tc.sub(&pal("00:00:00:10")).unwrap();
    assert_eq!(tc.as_str(), "-00:00:00:10");
    tc.add(&pal("00:00:01:00")).unwrap();
    assert_eq!(tc.as_str(), "00:00:00:15");
}

// ── Format mismatches ──────────────────────────────────────────

#[test]
fn mismatched_formats_are_rejected_without_mutation() {
    let mut a = df("01:00:00:00");
    let b = Timecode::from_string("01:00:00:00", FrameRateFormat::Fps29_97Ndf).unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    assert!(matches!(a.add(&b), Err(TimecodeError::FormatMismatch { .. })));
    assert!(matches!(a.sub(&b), Err(TimecodeError::FormatMismatch { .. })));
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
