//! Integration tests for timecode construction and format conversion.
//!
//! Reference sample positions come from 48 kHz Pro Tools and Ardour sessions.

use tccalc_core::{
    frames_to_hmsf, hmsf_to_frames, FrameRateFormat, Hmsf, Rational, Timecode, TimecodeError,
};

use tccalc_core::FrameRateFormat::*;

// ── Helpers ────────────────────────────────────────────────────

const SR_48K: Rational = Rational::integer(48000);

fn at_48k(samples: u64, format: FrameRateFormat) -> String {
    Timecode::from_unit_value(samples, SR_48K, format)
        .unwrap()
        .as_str()
        .to_string()
}

// ── Sample positions ───────────────────────────────────────────

#[test]
fn pro_tools_drop_frame_positions() {
    let cases = [
        (10_796_786, "00:03:44;27"),
        (172_799_827, "01:00:00;00"),
        (172_801_429, "01:00:00;01"),
        (345_599_654, "02:00:00;00"),
        (518_399_482, "03:00:00;00"),
        (518_445_928, "03:00:00;29"),
        (691_197_707, "03:59:59;29"),
        (4_147_099_757, "23:59:58;00"),
        (4_147_194_251, "23:59:59;29"),
    ];
    for (samples, expected) in cases {
        assert_eq!(at_48k(samples, Fps29_97Df), expected, "samples {samples}");
    }
}

#[test]
fn non_drop_end_of_day_positions() {
    assert_eq!(at_48k(4_151_345_598, Fps29_97Ndf), "23:59:59:29");
    assert_eq!(at_48k(4_147_198_400, Fps30), "23:59:59:29");
}

#[test]
fn sample_position_past_midnight() {
    assert_eq!(at_48k(4_147_197_000, Fps29_97Df), "00:00:00;00");

    let tc = Timecode::from_unit_value(4_147_197_000, SR_48K, Fps29_97Df)
        .unwrap()
        .with_no_rollover(true)
        .unwrap();
    assert_eq!(tc.as_str(), "24:00:00;00");
    assert_eq!(tc.hours(), 24);
}

#[test]
fn zero_denominator_rates_are_rejected() {
    let bad = Rational {
        numerator: 48000,
        denominator: 0,
    };
    assert!(matches!(
        Timecode::from_unit_value(10, bad, Fps25),
        Err(TimecodeError::InvalidRational { .. })
    ));
    assert!(matches!(
        "48000/0".parse::<Rational>(),
        Err(TimecodeError::InvalidRational { .. })
    ));
}

// ── Frame counts and labels ────────────────────────────────────

#[test]
fn minute_one_at_thirty_fps() {
    let tc = Timecode::from_frames(1800, Fps30).unwrap();
    assert_eq!(tc.as_str(), "00:01:00:00");

    // The same count at 29.97 DF lands two labels later.
    let df = Timecode::from_frames(1800, Fps29_97Df).unwrap();
    assert_eq!(df.as_str(), "00:01:00;02");
}

#[test]
fn drop_frame_labels_never_start_a_dropped_minute() {
    let per_day = tccalc_core::frames_per_day(Fps29_97Df).unwrap();
    for frame_number in (0..per_day).step_by(7) {
        let hmsf = frames_to_hmsf(frame_number, Fps29_97Df, true).unwrap();
        if hmsf.seconds == 0 && hmsf.minutes % 10 != 0 {
            assert!(hmsf.frames >= 2, "frame {frame_number} labelled {hmsf:?}");
        }
        assert_eq!(hmsf_to_frames(hmsf, Fps29_97Df).unwrap(), frame_number);
    }
}

#[test]
fn every_format_round_trips_a_day_of_labels() {
    for format in FrameRateFormat::ALL {
        let fps = format.nominal_fps().unwrap() as u32;
        for hmsf in [
            Hmsf::new(0, 0, 0, 0),
            Hmsf::new(0, 10, 0, 0),
            Hmsf::new(12, 34, 56, fps / 2),
            Hmsf::new(23, 59, 59, fps - 1),
        ] {
            let frames = hmsf_to_frames(hmsf, format).unwrap();
            assert_eq!(frames_to_hmsf(frames, format, true).unwrap(), hmsf, "{format}");
        }
    }
}

// ── Format conversion ──────────────────────────────────────────

#[test]
fn convert_and_convert_frames_differ() {
    let mut by_count = Timecode::from_frames(1800, Fps30).unwrap();
    let mut by_label = by_count.clone();

    by_count.convert(Fps29_97Df).unwrap();
    by_label.convert_frames(Fps29_97Df).unwrap();

    assert_eq!(by_count.frame_number(), 1800);
    assert_eq!(by_count.as_str(), "00:01:00;02");

    assert_eq!(by_label.frame_number(), 1798);
    assert_eq!(by_label.as_str(), "00:01:00;00");
}

#[test]
fn one_hour_drop_frame_relabelled_at_sixty() {
    let mut tc = Timecode::from_string("01:00:00:00", Fps29_97Df).unwrap();
    tc.convert(Fps60).unwrap();
    assert_eq!(tc.as_str(), "00:29:58:12");
    assert_eq!(tc.frame_number(), 107_892);
}

#[test]
fn fifty_nine_ninety_four_drop_frame_counts_four_labels() {
    let tc = Timecode::from_hmsf(0, 1, 0, 4, Fps59_94Df).unwrap();
    assert_eq!(tc.frame_number(), 3600);
    assert_eq!(tc.as_str(), "00:01:00;04");

    let tc = Timecode::from_frames(3600, Fps59_94Df).unwrap();
    assert_eq!(tc.hmsf(), Hmsf::new(0, 1, 0, 4));
}
