#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const VISITOR_SHEET: &str = "\
Visitors,Date
777,10/24/16
122,11/23/16
111,11/22/16
50,11/20/16
n/a,11/21/16
90,10/30/16
";

/// Scratch workbook directory that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Writes a settings file pointing at `sheet` with the given window.
    pub fn write_settings(&self, sheet: &str, window: usize) -> PathBuf {
        self.write(
            "settings.yaml",
            &format!("credentials: creds.json\nspreadsheet_id: {sheet}\nwindow: {window}\n"),
        )
    }

    /// Reads a worksheet back as rows of cells.
    pub fn read_grid(&self, name: &str) -> Vec<Vec<String>> {
        let contents = fs::read_to_string(self.path().join(name)).expect("read worksheet");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(contents.as_bytes());
        reader
            .records()
            .map(|record| {
                record
                    .expect("worksheet record")
                    .iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }
}

pub fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}
