//! Column addressing helpers.
//!
//! Worksheets address columns with letters in bijective base-26 (`A`..`Z`,
//! then `AA`), while the report core works with 1-based positions and header
//! names. [`column_label()`] bridges the two, [`column_index()`] resolves a
//! header name, and [`CellRange`] renders the A1 range a column write covers.

use std::fmt;

use crate::error::ReportError;

const ALPHABET_LEN: usize = 26;

/// Encodes a 1-based column position as its worksheet letter label.
///
/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`, `1000 -> "ALL"`. Position `0` has no
/// label and yields an empty string.
pub fn column_label(position: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = position;
    while remaining > 0 {
        let offset = (remaining - 1) % ALPHABET_LEN;
        letters.push(char::from(b'A' + offset as u8));
        remaining = (remaining - 1) / ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

/// Returns the 0-based position of the first header equal to `name`.
pub fn column_index(headers: &[String], name: &str) -> Result<usize, ReportError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ReportError::column_not_found(name))
}

/// A single-column block of cells starting at row 1, e.g. `D1:D11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub position: usize,
    pub rows: usize,
}

impl CellRange {
    pub fn column(position: usize, rows: usize) -> Self {
        CellRange { position, rows }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = column_label(self.position);
        write!(f, "{label}1:{label}{}", self.rows)
    }
}
