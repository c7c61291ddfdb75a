//! tccalc - timecode converter & calculator.
//!
//! The binary is a thin wrapper around [`run`], which turns parsed arguments
//! into the text to print.

pub mod cli;
pub mod value;

use anyhow::{Context, Result};
use std::fmt::Write;
use tccalc_core::{FrameRateFormat, Rational, Timecode};
use tracing::info;

pub use cli::Cli;
pub use value::{build_timecode, classify, parse_format, ValueKind};

/// Execute one invocation and return its stdout text.
pub fn run(cli: &Cli) -> Result<String> {
    if cli.list {
        return Ok(list_formats());
    }

    let format = parse_format(cli.format.as_deref().context("Missing timecode --format")?)?;
    let value = cli.value.as_deref().context("Missing timecode value")?;
    let rate = cli
        .rate
        .as_deref()
        .map(|r| r.parse::<Rational>().with_context(|| format!("Wrong edit rate {r:?}")))
        .transpose()?;

    let mut tc = build_timecode(value, format, rate, cli.strict)?;
    if cli.no_rollover {
        tc.set_no_rollover(true)?;
    }

    apply_operation(cli, &mut tc, format)?;
    info!(timecode = %tc, frames = tc.frame_number(), "result");

    render_output(cli, &tc)
}

fn apply_operation(cli: &Cli, tc: &mut Timecode, format: FrameRateFormat) -> Result<()> {
    if let Some(target) = &cli.convert_to {
        tc.convert(parse_format(target)?)?;
    } else if let Some(target) = &cli.convert_frames_to {
        tc.convert_frames(parse_format(target)?)?;
    } else if let Some(add) = &cli.add {
        let operand = build_timecode(add, format, None, cli.strict)
            .with_context(|| format!("Invalid --add value {add:?}"))?;
        tc.add(&operand)?;
    } else if let Some(sub) = &cli.sub {
        let operand = build_timecode(sub, format, None, cli.strict)
            .with_context(|| format!("Invalid --sub value {sub:?}"))?;
        tc.sub(&operand)?;
    }
    Ok(())
}

fn render_output(cli: &Cli, tc: &Timecode) -> Result<String> {
    let mut out = String::new();
    if cli.hmsf {
        writeln!(out, "{tc}")?;
    } else if cli.frames {
        writeln!(out, "{}", tc.frame_number())?;
    } else if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(tc)?)?;
    } else {
        writeln!(out, "format   : {}", tc.format())?;
        writeln!(out, "timecode : {tc}")?;
        writeln!(out, "frames   : {}", tc.frame_number())?;
    }
    Ok(out)
}

/// The `--list` text.
pub fn list_formats() -> String {
    let mut out = String::from("\n Supported timecode format options :\n\n");
    for format in FrameRateFormat::ALL {
        out.push_str("   ");
        out.push_str(format.name());
        out.push('\n');
    }
    out.push('\n');
    out
}
