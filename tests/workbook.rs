mod common;

use std::num::NonZeroUsize;

use common::{TestWorkspace, VISITOR_SHEET, strings};
use sheet_average::config::Settings;
use sheet_average::error::ReportError;
use sheet_average::pipeline::{AppendRequest, DataSink, DataSource, ReportPipeline, RunOutcome};
use sheet_average::workbook::CsvWorkbook;

fn report_error(err: &anyhow::Error) -> &ReportError {
    err.downcast_ref::<ReportError>()
        .unwrap_or_else(|| panic!("Expected a report error, got {err:?}"))
}

#[test]
fn fetch_splits_header_from_rows() {
    let workspace = TestWorkspace::new();
    workspace.write("visitors.csv", VISITOR_SHEET);
    let workbook = CsvWorkbook::open(workspace.path());

    let data = workbook.fetch("visitors").unwrap();

    assert_eq!(data.headers, strings(&["Visitors", "Date"]));
    assert_eq!(data.rows.len(), 6);
    assert_eq!(data.rows[0], strings(&["777", "10/24/16"]));
}

#[test]
fn fetch_pads_short_rows() {
    let workspace = TestWorkspace::new();
    workspace.write("ragged.csv", "Visitors,Date,Note\n1,01/01/17\n");
    let workbook = CsvWorkbook::open(workspace.path());

    let data = workbook.fetch("ragged.csv").unwrap();

    assert_eq!(data.rows, vec![strings(&["1", "01/01/17", ""])]);
}

#[test]
fn fetch_reads_tab_separated_sheets() {
    let workspace = TestWorkspace::new();
    workspace.write("visitors.tsv", "Visitors\tDate\n5\t01/01/17\n");
    let workbook = CsvWorkbook::open(workspace.path());

    let data = workbook.fetch("visitors.tsv").unwrap();

    assert_eq!(data.rows, vec![strings(&["5", "01/01/17"])]);
}

#[test]
fn fetch_unknown_sheet_is_not_found() {
    let workspace = TestWorkspace::new();
    let workbook = CsvWorkbook::open(workspace.path());

    let err = workbook.fetch("www111").unwrap_err();

    assert!(matches!(
        report_error(&err),
        ReportError::DataSetNotFound { id } if id == "www111"
    ));
}

#[test]
fn fetch_header_only_sheet_is_empty() {
    let workspace = TestWorkspace::new();
    workspace.write("www111.csv", "Visitors,Date\n");
    let workbook = CsvWorkbook::open(workspace.path());

    let err = workbook.fetch("www111").unwrap_err();

    assert!(matches!(report_error(&err), ReportError::EmptyDataSet { .. }));
    assert_eq!(err.to_string(), "No data in spreadsheet with id: www111");
}

#[test]
fn fetch_blank_file_is_empty() {
    let workspace = TestWorkspace::new();
    workspace.write("blank.csv", "");
    let workbook = CsvWorkbook::open(workspace.path());

    let err = workbook.fetch("blank").unwrap_err();

    assert!(matches!(report_error(&err), ReportError::EmptyDataSet { .. }));
}

#[test]
fn append_column_writes_label_and_values() {
    let workspace = TestWorkspace::new();
    workspace.write("sheet.csv", "A,B\n1,2\n3,4\n5,6\n");
    let mut workbook = CsvWorkbook::open(workspace.path());

    workbook
        .append_column(
            "sheet",
            &AppendRequest {
                position: 3,
                label: "Field".to_string(),
                values: strings(&["10", "10"]),
            },
        )
        .unwrap();

    assert_eq!(
        workspace.read_grid("sheet.csv"),
        vec![
            strings(&["A", "B", "Field"]),
            strings(&["1", "2", "10"]),
            strings(&["3", "4", "10"]),
            strings(&["5", "6", ""]),
        ]
    );
}

#[test]
fn pipeline_updates_the_worksheet_file() {
    let workspace = TestWorkspace::new();
    workspace.write("visitors.csv", VISITOR_SHEET);
    let source = CsvWorkbook::open(workspace.path());
    let mut sink = source.clone();
    let settings = Settings::new("visitors", NonZeroUsize::new(5).unwrap());

    let outcome = ReportPipeline::new(settings).run(&source, &mut sink).unwrap();

    assert_eq!(outcome, RunOutcome::Completed { rows: 6, averages: 2 });
    let grid = workspace.read_grid("visitors.csv");
    assert_eq!(
        grid[0],
        strings(&["Visitors", "Date", "Moving Average of period 5", "Sorted Date"])
    );
    // sorted visitors: 122, 111, 0 (n/a), 50, 90, 777
    assert_eq!(grid[1][2], "74.6");
    assert_eq!(grid[2][2], "205.6");
    assert_eq!(grid[3][2], "");
    let sorted_dates = grid[1..].iter().map(|row| row[3].as_str()).collect::<Vec<_>>();
    assert_eq!(
        sorted_dates,
        vec!["11/23/16", "11/22/16", "11/21/16", "11/20/16", "10/30/16", "10/24/16"]
    );
    // original cells are untouched
    assert_eq!(grid[1][..2], strings(&["777", "10/24/16"])[..]);
}
