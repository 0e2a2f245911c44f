pub mod average;
pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod extract;
pub mod io_utils;
pub mod pipeline;
pub mod preview;
pub mod sort;
pub mod table;
pub mod workbook;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::{Cli, Commands, SettingsArgs},
    config::Settings,
    extract::extract_column,
    pipeline::{DataSource, ReportPipeline, RunOutcome},
    workbook::CsvWorkbook,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("sheet_average", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => handle_run(&args),
        Commands::Preview(args) => preview::execute(&args),
        Commands::Column(args) => handle_column(&args),
    }
}

pub(crate) fn load_settings(args: &SettingsArgs) -> Result<Settings> {
    let settings = Settings::load(&args.config)
        .with_context(|| format!("Loading settings from {:?}", args.config))?;
    Ok(settings.with_overrides(None, args.sheet.as_deref()))
}

fn handle_run(args: &cli::RunArgs) -> Result<()> {
    let settings = load_settings(&args.settings)?.with_overrides(args.window, None);
    info!(
        "Calculating moving average for '{}' with window {}",
        settings.spreadsheet_id, settings.window
    );
    let source = CsvWorkbook::from_settings(&settings)?;
    let mut sink = source.clone();
    debug!("Workbook root: {:?}", source.root());

    match ReportPipeline::new(settings).run(&source, &mut sink)? {
        RunOutcome::Completed { rows, averages } => {
            info!("Report complete: {rows} row(s) sorted, {averages} average(s) written");
        }
        RunOutcome::InsufficientVolume { rows, window } => {
            info!("Nothing written: {rows} row(s) is not more than window {window}");
        }
    }
    Ok(())
}

fn handle_column(args: &cli::ColumnArgs) -> Result<()> {
    let settings = load_settings(&args.settings)?;
    let workbook = CsvWorkbook::from_settings(&settings)?;
    let sheet = settings.spreadsheet_id.as_str();
    let data = workbook.fetch(sheet)?;
    let rows = if args.sorted {
        sort::sort_by_date(&data.rows, &data.headers)?
    } else {
        data.rows
    };
    debug!("Extracting '{}' as {}", args.name, args.kind);
    let values = extract_column(&rows, &data.headers, &args.name, args.kind)?;
    for value in values.to_strings() {
        println!("{value}");
    }
    info!("Printed {} value(s) of '{}' from '{sheet}'", values.len(), args.name);
    Ok(())
}
