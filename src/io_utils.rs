//! CSV reader/writer construction and delimiter resolution for worksheet files.
//!
//! - **Delimiter resolution**: extension-based auto-detection (`.csv` → comma,
//!   `.tsv` → tab) with manual override support.
//! - **Reading**: worksheets are read without header handling by the csv
//!   crate; the caller decides which record is the header row.
//! - **Quoting**: output uses `QuoteStyle::Always` so cell text round-trips.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::QuoteStyle;

pub const DEFAULT_CSV_DELIMITER: u8 = b',';
pub const DEFAULT_TSV_DELIMITER: u8 = b'\t';

pub fn resolve_delimiter(path: &Path, provided: Option<u8>) -> u8 {
    provided.unwrap_or_else(|| match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => DEFAULT_TSV_DELIMITER,
        _ => DEFAULT_CSV_DELIMITER,
    })
}

pub fn open_csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

pub fn open_csv_writer<W>(writer: W, delimiter: u8) -> csv::Writer<W>
where
    W: Write,
{
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .flexible(true);
    builder.from_writer(writer)
}

/// Reads every record of the file as a grid of cells, header row included.
pub fn read_grid(path: &Path, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).with_context(|| format!("Opening worksheet {path:?}"))?;
    let mut reader = open_csv_reader(BufReader::new(file), delimiter);
    reader
        .records()
        .enumerate()
        .map(|(idx, record)| -> Result<Vec<String>> {
            let record = record.with_context(|| format!("Reading row {} of {path:?}", idx + 1))?;
            Ok(record.iter().map(str::to_string).collect())
        })
        .collect()
}

pub fn write_grid(path: &Path, delimiter: u8, grid: &[Vec<String>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating worksheet {path:?}"))?;
    let mut writer = open_csv_writer(BufWriter::new(file), delimiter);
    for (idx, row) in grid.iter().enumerate() {
        writer
            .write_record(row.iter())
            .with_context(|| format!("Writing row {} of {path:?}", idx + 1))?;
    }
    writer
        .flush()
        .with_context(|| format!("Flushing worksheet {path:?}"))?;
    Ok(())
}
