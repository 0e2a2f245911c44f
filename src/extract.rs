//! Typed column extraction from untyped worksheet rows.
//!
//! Integer extraction is tolerant per cell: a cell that does not parse is
//! replaced by the caller's default and the column as a whole still succeeds.
//! Only structural problems (an unknown column) fail the call.

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::{columns::column_index, error::ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    /// Parse each cell as an integer, substituting `default` when it does not parse.
    Integer { default: i64 },
}

impl FromStr for ValueKind {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(ValueKind::String),
            "integer" | "int" => Ok(ValueKind::Integer { default: 0 }),
            _ => Err(ReportError::UnsupportedValueKind {
                kind: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer { default } => write!(f, "integer (default {default})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValues {
    Strings(Vec<String>),
    Integers(Vec<i64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Strings(values) => values.len(),
            ColumnValues::Integers(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell text for each value, in row order.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            ColumnValues::Strings(values) => values.clone(),
            ColumnValues::Integers(values) => values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

pub fn extract_column(
    rows: &[Vec<String>],
    headers: &[String],
    column_name: &str,
    kind: ValueKind,
) -> Result<ColumnValues, ReportError> {
    Ok(match kind {
        ValueKind::String => ColumnValues::Strings(string_column(rows, headers, column_name)?),
        ValueKind::Integer { default } => {
            ColumnValues::Integers(integer_column(rows, headers, column_name, default)?)
        }
    })
}

pub fn string_column(
    rows: &[Vec<String>],
    headers: &[String],
    column_name: &str,
) -> Result<Vec<String>, ReportError> {
    let idx = column_index(headers, column_name)?;
    Ok(cells(rows, idx).map(str::to_string).collect())
}

pub fn integer_column(
    rows: &[Vec<String>],
    headers: &[String],
    column_name: &str,
    default: i64,
) -> Result<Vec<i64>, ReportError> {
    let idx = column_index(headers, column_name)?;
    Ok(cells(rows, idx)
        .map(|cell| cast_int(cell, default))
        .collect())
}

fn cells(rows: &[Vec<String>], idx: usize) -> impl Iterator<Item = &str> {
    rows.iter()
        .map(move |row| row.get(idx).map(String::as_str).unwrap_or(""))
}

/// Parses a whole-number cell. Decimal points, exponents, text and values
/// outside the `i64` range are rejected.
pub fn try_cast_int(value: &str) -> Result<i64, ParseIntError> {
    value.trim().parse::<i64>()
}

/// Whole-number cell value, or `default` when [`try_cast_int()`] rejects it.
/// Counts beyond `i64::MAX` therefore read as `default`.
pub fn cast_int(value: &str, default: i64) -> i64 {
    try_cast_int(value).unwrap_or(default)
}
