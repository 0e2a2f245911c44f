use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{config::DEFAULT_SETTINGS_FILE, extract::ValueKind};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Append a moving average of visitor counts to a worksheet",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort the worksheet by date and append the moving average and sorted date columns
    Run(RunArgs),
    /// Show the first rows of a worksheet with column letters
    Preview(PreviewArgs),
    /// Print the values of a single worksheet column
    Column(ColumnArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Settings file naming the worksheet and moving-average window
    #[arg(short = 'c', long = "config", default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,
    /// Worksheet id to use instead of the configured spreadsheet_id
    #[arg(short = 's', long = "sheet")]
    pub sheet: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
    /// Moving-average window to use instead of the configured one
    #[arg(short = 'w', long = "window")]
    pub window: Option<NonZeroUsize>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
    /// Number of data rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}

#[derive(Debug, Args)]
pub struct ColumnArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
    /// Header name of the column to print
    #[arg(short = 'n', long = "name")]
    pub name: String,
    /// How to read the cells: `string` or `integer` (unparsable cells become 0)
    #[arg(short = 'k', long = "kind", default_value = "string", value_parser = parse_value_kind)]
    pub kind: ValueKind,
    /// Order rows by the Date column (most recent first) before extracting
    #[arg(long)]
    pub sorted: bool,
}

pub fn parse_value_kind(value: &str) -> Result<ValueKind, String> {
    value.parse::<ValueKind>().map_err(|err| err.to_string())
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
