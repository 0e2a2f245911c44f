use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, table, workbook::CsvWorkbook};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let settings = crate::load_settings(&args.settings)?;
    let workbook = CsvWorkbook::from_settings(&settings)?;
    let sheet = settings.spreadsheet_id.as_str();
    let grid = workbook
        .read_sheet(sheet)
        .with_context(|| format!("Reading worksheet '{sheet}'"))?;

    let shown = grid.len().min(args.rows.saturating_add(1));
    table::print_sheet(&grid[..shown]);
    info!(
        "Displayed {} of {} data row(s) from '{sheet}'",
        shown.saturating_sub(1),
        grid.len().saturating_sub(1)
    );
    Ok(())
}
