//! Typed failures raised by the report core and the worksheet collaborators.
//!
//! Glue code wraps these in [`anyhow::Error`]; callers that need to react to a
//! specific condition can `downcast_ref::<ReportError>()`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A required column name is missing from the header row.
    #[error("Column '{column}' not found in header")]
    ColumnNotFound { column: String },

    /// The extractor was asked for a value kind it does not know.
    #[error("Unsupported value kind '{kind}' (expected 'string' or 'integer')")]
    UnsupportedValueKind { kind: String },

    /// A date cell did not match the month/day/two-digit-year layout.
    #[error("Failed to parse '{value}' as a date in data row {row}")]
    DateParse {
        value: String,
        row: usize,
        #[source]
        source: DateFormatError,
    },

    #[error("No spreadsheet was found with id: {id}")]
    DataSetNotFound { id: String },

    #[error("No data in spreadsheet with id: {id}")]
    EmptyDataSet { id: String },
}

/// Why a date cell was rejected.
#[derive(Debug, Error)]
pub enum DateFormatError {
    #[error("expected month/day/yy without surrounding spaces")]
    Layout,
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

impl ReportError {
    pub(crate) fn column_not_found(column: &str) -> Self {
        ReportError::ColumnNotFound {
            column: column.to_string(),
        }
    }
}
