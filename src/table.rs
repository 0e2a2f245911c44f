use std::borrow::Cow;
use std::fmt::Write as _;

use crate::columns::column_label;

/// Renders worksheet rows under a `#, A, B, ...` heading with 1-based row
/// numbers, the way a spreadsheet grid reads.
pub fn render_sheet(grid: &[Vec<String>]) -> String {
    let column_count = grid.iter().map(Vec::len).max().unwrap_or(0);
    let headers = std::iter::once("#".to_string())
        .chain((1..=column_count).map(column_label))
        .collect::<Vec<_>>();
    let rows = grid
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            std::iter::once((idx + 1).to_string())
                .chain(row.iter().cloned())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let column_count = headers.len();
    let mut widths = headers.iter().map(|h| display_width(h)).collect::<Vec<_>>();

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths));

    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(&rule, &widths));

    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths));
    }

    output
}

pub fn print_sheet(grid: &[Vec<String>]) {
    print!("{}", render_sheet(grid));
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let mut line = values
        .iter()
        .zip(widths)
        .map(|(value, width)| {
            let sanitized = sanitize_cell(value);
            let padding = width.saturating_sub(display_width(&sanitized));
            format!("{sanitized}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.truncate(line.trim_end().len());
    line
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
