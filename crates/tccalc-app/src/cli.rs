//! Command-line arguments.

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tccalc")]
#[command(about = "Timecode converter & calculator")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(after_help = "\
tc value can be either an hh:mm:ss:ff timecode, a frame number or any value
associated with an edit rate.

Examples:
  tccalc -F 29.97DF 01:02:03:04 -a 02:10:01:07
  tccalc -F 29.97DF 4147194251 -R 48000/1
  tccalc -F 29.97DF 2589407
  tccalc -F 29.97DF 01:00:00:00 -c 60")]
pub struct Cli {
    /// Show this help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// List all supported TC formats
    #[arg(short, long)]
    pub list: bool,

    /// Format of the input TC value, e.g. 25 or 29.97DF
    #[arg(short = 'F', long, env = "TCCALC_FORMAT", required_unless_present = "list")]
    pub format: Option<String>,

    /// Edit rate of the input value (n/d or n); default is the frame rate
    #[arg(short = 'R', long, env = "TCCALC_RATE", value_name = "RATE")]
    pub rate: Option<String>,

    /// Relabel the same frame count at another format
    #[arg(short, long = "convert-to", value_name = "FORMAT", group = "operation")]
    pub convert_to: Option<String>,

    /// Recount the same hh:mm:ss:ff digits at another format
    #[arg(long = "convert-frames-to", value_name = "FORMAT", group = "operation")]
    pub convert_frames_to: Option<String>,

    /// Add a timecode or frame count to the input
    #[arg(short, long, value_name = "VALUE", group = "operation")]
    pub add: Option<String>,

    /// Subtract a timecode or frame count from the input
    #[arg(short, long, value_name = "VALUE", group = "operation")]
    pub sub: Option<String>,

    /// Output the timecode as hh:mm:ss:ff only
    #[arg(short = 'h', long)]
    pub hmsf: bool,

    /// Output the frame number only
    #[arg(short, long, conflicts_with = "hmsf")]
    pub frames: bool,

    /// Output the full timecode as JSON
    #[arg(long, conflicts_with_all = ["hmsf", "frames"])]
    pub json: bool,

    /// Don't roll over when the TC is beyond the 24h day limit
    #[arg(short, long)]
    pub no_rollover: bool,

    /// Reject timecodes with out-of-range fields or wrong separators
    #[arg(long)]
    pub strict: bool,

    /// Input TC value
    #[arg(required_unless_present = "list")]
    pub value: Option<String>,
}
