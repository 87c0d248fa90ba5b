use artcat::api::{CatalogApi, ImportSheet};
use artcat::commands::import::ImportRow;
use artcat::config::ArtcatConfig;
use artcat::error::{CatalogError, Result};
use artcat::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = open_api(&cli)?;

    if api.recovered_from_corruption() {
        eprintln!(
            "{}",
            "Warning: stored records were unreadable; starting with an empty catalogue."
                .yellow()
        );
    }

    let result = match cli.command {
        Commands::Add { code, fields } => api.add_record(&code, fields.into_draft())?,
        Commands::Edit { code, fields } => api.edit_record(&code, fields.into_draft())?,
        Commands::Delete { code } => api.delete_record(&code)?,
        Commands::Get { code } => api.get_record(&code)?,
        Commands::List => api.list_codes()?,
        Commands::Import { file } => {
            let sheet = read_csv_sheet(&file)?;
            api.import_sheet(&sheet)?
        }
    };

    print::print_records(&result.records);
    if !result.listed.is_empty() {
        print::print_listing(&result.listed);
    }
    if let Some(report) = &result.import {
        print::print_import_report(report);
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn open_api(cli: &Cli) -> Result<CatalogApi<FileStore>> {
    let records_file = match &cli.data_file {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "artcat", "artcat")
                .expect("Could not determine data dir");
            let data_dir: PathBuf = proj_dirs.data_dir().to_path_buf();
            let config = ArtcatConfig::load(&data_dir).unwrap_or_default();
            config.records_path(&data_dir)
        }
    };
    CatalogApi::open(FileStore::new(records_file))
}

/// Read a CSV file with a header row into the importer's tabular form.
/// Absent trailing cells stay absent; the importer treats them as blank.
fn read_csv_sheet(path: &Path) -> Result<ImportSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_to_io)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_to_io)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<ImportRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_to_io)?;
        let row: ImportRow = columns
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }
    Ok(ImportSheet::new(columns, rows))
}

fn csv_to_io(e: csv::Error) -> CatalogError {
    CatalogError::Io(std::io::Error::other(e))
}
