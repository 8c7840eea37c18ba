//! Text cleanup command: run the normalizer alone and print the result.

use clap::{Args, ValueEnum};
use timetally_core::{normalize, NormalizeMode};

/// CLI spelling of the cleanup modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Strip markers, canonicalize ranges, keep ranges only, drop blanks
    Smart,
    /// Remove one leading bullet/checkbox marker per line
    StripList,
    /// Rewrite loose range matches as `HH:MM - HH:MM`
    Normalize,
    /// Keep only the first range per line
    Extract,
    /// Drop blank lines
    Trim,
}

impl ModeArg {
    pub fn to_mode(self) -> NormalizeMode {
        match self {
            ModeArg::Smart => NormalizeMode::Smart,
            ModeArg::StripList => NormalizeMode::StripListMarkers,
            ModeArg::Normalize => NormalizeMode::NormalizeRanges,
            ModeArg::Extract => NormalizeMode::ExtractRangesOnly,
            ModeArg::Trim => NormalizeMode::RemoveBlankLines,
        }
    }
}

#[derive(Args)]
pub struct FormatArgs {
    /// Cleanup mode
    #[arg(value_enum)]
    pub mode: ModeArg,
    /// Text to clean; read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,
}

pub fn run(args: FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_text(args.text)?;
    println!("{}", normalize(&text, args.mode.to_mode()));
    Ok(())
}
