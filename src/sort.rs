//! Chronological ordering of worksheet rows.
//!
//! Dates are stored as `month/day/yy` (for example `10/24/16`). The two-digit
//! year is always read as 20yy, so only dates in 2000..=2099 are supported.

use chrono::NaiveDate;
use log::debug;

use crate::{
    columns::column_index,
    error::{DateFormatError, ReportError},
};

pub const DATE_COLUMN: &str = "Date";

const DATE_FORMAT: &str = "%m/%d/%Y";
const CENTURY_PREFIX: &str = "20";

/// Returns the rows ordered from the most recent date to the oldest.
///
/// Every date is parsed before anything is reordered, so a single bad cell
/// fails the whole call. Rows sharing a date keep their relative order.
pub fn sort_by_date(
    rows: &[Vec<String>],
    headers: &[String],
) -> Result<Vec<Vec<String>>, ReportError> {
    let idx = column_index(headers, DATE_COLUMN)?;
    let mut keyed = rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            parse_short_date(cell)
                .map(|date| (date, row))
                .map_err(|source| ReportError::DateParse {
                    value: cell.to_string(),
                    row: row_idx + 1,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|left, right| right.0.cmp(&left.0));
    debug!("Sorted {} row(s) by '{DATE_COLUMN}'", keyed.len());
    Ok(keyed.into_iter().map(|(_, row)| row.clone()).collect())
}

/// Parses a `month/day/yy` cell by splicing the century in front of the
/// last two characters.
///
/// The cell may not start with whitespace and its year must be digits only;
/// chrono would otherwise skip the padding and accept the cell.
pub fn parse_short_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    let year_is_digits = value
        .rsplit_once('/')
        .is_some_and(|(_, year)| !year.is_empty() && year.bytes().all(|b| b.is_ascii_digit()));
    if value.starts_with(char::is_whitespace) || !year_is_digits {
        return Err(DateFormatError::Layout);
    }
    let split = value
        .char_indices()
        .rev()
        .nth(1)
        .map(|(pos, _)| pos)
        .unwrap_or(0);
    let (head, year) = value.split_at(split);
    let expanded = format!("{head}{CENTURY_PREFIX}{year}");
    Ok(NaiveDate::parse_from_str(&expanded, DATE_FORMAT)?)
}
