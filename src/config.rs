//! Run configuration.
//!
//! Settings are read from a YAML file such as:
//!
//! ```yaml
//! credentials: service-account.json
//! scope: https://spreadsheets.google.com/feeds
//! spreadsheet_id: visitors
//! window: 5
//! ```
//!
//! Relative paths resolve against the folder holding the settings file, which
//! is also the root of the local workbook.

use std::{
    fs::File,
    io::BufReader,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::cli::parse_delimiter;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Location of the service credentials used to reach the worksheet.
    #[serde(default)]
    pub credentials: PathBuf,
    #[serde(default)]
    pub scope: Option<String>,
    pub spreadsheet_id: String,
    /// Moving-average span; zero is rejected when the file is parsed.
    pub window: NonZeroUsize,
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(skip)]
    pub root: PathBuf,
}

impl Settings {
    pub fn new(spreadsheet_id: impl Into<String>, window: NonZeroUsize) -> Self {
        Settings {
            credentials: PathBuf::new(),
            scope: None,
            spreadsheet_id: spreadsheet_id.into(),
            window,
            delimiter: None,
            root: PathBuf::from("."),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening settings file {path:?}"))?;
        let reader = BufReader::new(file);
        let mut settings: Settings =
            serde_yaml::from_reader(reader).context("Parsing settings YAML")?;
        settings.root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !settings.credentials.as_os_str().is_empty() && settings.credentials.is_relative() {
            settings.credentials = settings.root.join(&settings.credentials);
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, window: Option<NonZeroUsize>, sheet: Option<&str>) -> Self {
        if let Some(window) = window {
            self.window = window;
        }
        if let Some(sheet) = sheet {
            self.spreadsheet_id = sheet.to_string();
        }
        self
    }

    pub fn delimiter_byte(&self) -> Result<Option<u8>> {
        self.delimiter
            .as_deref()
            .map(|value| {
                parse_delimiter(value).map_err(|err| anyhow!("Invalid delimiter '{value}': {err}"))
            })
            .transpose()
    }

    fn validate(&self) -> Result<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(anyhow!("Settings must name a spreadsheet_id"));
        }
        self.delimiter_byte()?;
        Ok(())
    }
}
