//! The moving-average report.
//!
//! A run fetches one worksheet, orders its rows by date, averages the visitor
//! counts over the configured window and appends two columns: the averages and
//! the dates in their new order. Nothing is written unless every earlier step
//! succeeded.

use anyhow::Result;
use log::{debug, info, warn};

use crate::{
    average::{format_average, moving_average},
    config::Settings,
    extract::{integer_column, string_column},
    sort::{DATE_COLUMN, sort_by_date},
};

pub const VISITORS_COLUMN: &str = "Visitors";
pub const SORTED_DATE_LABEL: &str = "Sorted Date";
const VISITOR_DEFAULT: i64 = 0;

/// Header row plus data rows as read from a worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        DataSet { headers, rows }
    }
}

/// One column to write: a header cell at row 1 of `position` (1-based) with
/// `values` below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendRequest {
    pub position: usize,
    pub label: String,
    pub values: Vec<String>,
}

pub trait DataSource {
    fn fetch(&self, dataset_id: &str) -> Result<DataSet>;
}

pub trait DataSink {
    fn append_column(&mut self, dataset_id: &str, request: &AppendRequest) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both columns were appended.
    Completed { rows: usize, averages: usize },
    /// The worksheet does not hold more rows than the window; nothing was done.
    InsufficientVolume { rows: usize, window: usize },
}

pub struct ReportPipeline {
    settings: Settings,
}

impl ReportPipeline {
    pub fn new(settings: Settings) -> Self {
        ReportPipeline { settings }
    }

    pub fn average_label(&self) -> String {
        format!("Moving Average of period {}", self.settings.window)
    }

    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> Result<RunOutcome>
    where
        S: DataSource + ?Sized,
        K: DataSink + ?Sized,
    {
        let sheet = self.settings.spreadsheet_id.as_str();
        let window = self.settings.window;
        debug!(
            "Using credentials at {:?} (scope {}) for worksheet '{sheet}'",
            self.settings.credentials,
            self.settings.scope.as_deref().unwrap_or("default")
        );

        let DataSet { headers, rows } = source.fetch(sheet)?;
        if rows.len() <= window.get() {
            warn!(
                "Not enough data to calculate moving average with window {window} ({} row(s) in '{sheet}')",
                rows.len()
            );
            return Ok(RunOutcome::InsufficientVolume {
                rows: rows.len(),
                window: window.get(),
            });
        }

        let sorted = sort_by_date(&rows, &headers)?;
        let visitors = integer_column(&sorted, &headers, VISITORS_COLUMN, VISITOR_DEFAULT)?;
        let dates = string_column(&sorted, &headers, DATE_COLUMN)?;

        let series = visitors.iter().map(|&count| count as f64).collect::<Vec<_>>();
        let averages = moving_average(&series, window);
        debug!(
            "Computed {} average(s) from {} row(s)",
            averages.len(),
            series.len()
        );

        let requests = [
            AppendRequest {
                position: headers.len() + 1,
                label: self.average_label(),
                values: averages.iter().map(|&avg| format_average(avg)).collect(),
            },
            AppendRequest {
                position: headers.len() + 2,
                label: SORTED_DATE_LABEL.to_string(),
                values: dates,
            },
        ];
        for request in &requests {
            sink.append_column(sheet, request)?;
        }

        info!(
            "Appended {} moving average value(s) and {} sorted date(s) to '{sheet}'",
            averages.len(),
            rows.len()
        );
        Ok(RunOutcome::Completed {
            rows: rows.len(),
            averages: averages.len(),
        })
    }
}
