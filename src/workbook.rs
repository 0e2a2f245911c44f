//! A directory of CSV/TSV files acting as a spreadsheet workbook.
//!
//! Each worksheet is one file; its id is the file name, with `.csv` assumed
//! when no extension is given. The first record is the header row.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};

use crate::{
    columns::CellRange,
    config::Settings,
    error::ReportError,
    io_utils,
    pipeline::{AppendRequest, DataSet, DataSink, DataSource},
};

const DEFAULT_EXTENSION: &str = "csv";

#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    root: PathBuf,
    delimiter: Option<u8>,
}

impl CsvWorkbook {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        CsvWorkbook {
            root: root.into(),
            delimiter: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(CsvWorkbook::open(&settings.root).with_delimiter(settings.delimiter_byte()?))
    }

    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sheet_path(&self, sheet_id: &str) -> PathBuf {
        let path = self.root.join(sheet_id);
        if path.extension().is_some() {
            path
        } else {
            path.with_extension(DEFAULT_EXTENSION)
        }
    }

    /// Every cell of the worksheet, header row first.
    pub fn read_sheet(&self, sheet_id: &str) -> Result<Vec<Vec<String>>> {
        let path = self.existing_sheet(sheet_id)?;
        let delimiter = io_utils::resolve_delimiter(&path, self.delimiter);
        debug!("Reading worksheet {path:?}");
        io_utils::read_grid(&path, delimiter)
    }

    fn existing_sheet(&self, sheet_id: &str) -> Result<PathBuf> {
        let path = self.sheet_path(sheet_id);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ReportError::DataSetNotFound {
                id: sheet_id.to_string(),
            }
            .into())
        }
    }
}

impl DataSource for CsvWorkbook {
    fn fetch(&self, dataset_id: &str) -> Result<DataSet> {
        let mut grid = self.read_sheet(dataset_id)?.into_iter();
        let headers = grid.next().unwrap_or_default();
        let rows = grid
            .map(|mut row| {
                if row.len() < headers.len() {
                    row.resize(headers.len(), String::new());
                }
                row
            })
            .collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(ReportError::EmptyDataSet {
                id: dataset_id.to_string(),
            }
            .into());
        }
        info!(
            "Loaded {} row(s) across {} column(s) from '{dataset_id}'",
            rows.len(),
            headers.len()
        );
        Ok(DataSet::new(headers, rows))
    }
}

impl DataSink for CsvWorkbook {
    fn append_column(&mut self, dataset_id: &str, request: &AppendRequest) -> Result<()> {
        let path = self.existing_sheet(dataset_id)?;
        let delimiter = io_utils::resolve_delimiter(&path, self.delimiter);
        let mut grid = io_utils::read_grid(&path, delimiter)?;

        let range = CellRange::column(request.position, request.values.len() + 1);
        place_column(&mut grid, request);
        io_utils::write_grid(&path, delimiter, &grid)?;
        info!("Wrote '{}' to {range} of '{dataset_id}'", request.label);
        Ok(())
    }
}

/// Widens the grid to `request.position` columns and writes the label and
/// values top-down into that column. Cells below the values are left as-is.
fn place_column(grid: &mut Vec<Vec<String>>, request: &AppendRequest) {
    let needed_rows = request.values.len() + 1;
    if grid.len() < needed_rows {
        grid.resize(needed_rows, Vec::new());
    }
    let width = grid
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(request.position);
    for row in grid.iter_mut() {
        row.resize(width, String::new());
    }

    let column = request.position.saturating_sub(1);
    let cells = std::iter::once(&request.label).chain(request.values.iter());
    for (row, value) in grid.iter_mut().zip(cells) {
        row[column] = value.clone();
    }
}
