//! Import command implementation

use super::shared::{open_store, print_json};
use crate::app::services::import_normalizer::{ImportSummary, LocationImporter};
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::config::AppConfig;
use crate::{Error, Result};
use colored::*;
use std::io::Read;
use tracing::info;

/// Run the import command
///
/// An import that finds no usable line is reported but is not an error.
pub fn run_import(args: ImportArgs, config: &AppConfig) -> Result<()> {
    let text = read_input(&args)?;
    let mut store = open_store(config);
    let mut importer = LocationImporter::new(config.import.clone());

    let summary = importer.import(&mut store, &text)?;
    info!("Import written to {}", store.path().display());

    match args.output_format {
        OutputFormat::Human => print_human_summary(&summary),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}

fn read_input(args: &ImportArgs) -> Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read stdin", e))?;
            Ok(text)
        }
    }
}

fn print_human_summary(summary: &ImportSummary) {
    if summary.is_empty() {
        println!(
            "{}",
            "No valid location found in the input. Check the format and try again."
                .yellow()
                .bold()
        );
        if summary.skipped > 0 {
            println!("  Lines without coordinates: {}", summary.skipped);
        }
        return;
    }

    println!(
        "{} {} locations",
        "Imported".bright_green().bold(),
        summary.imported.to_string().bright_white().bold()
    );
    println!("  WKT points:        {}", summary.wkt_matches);
    println!("  Coordinate pairs:  {}", summary.decimal_pair_matches);
    if summary.header_lines > 0 {
        println!("  Header lines:      {}", summary.header_lines);
    }
    if summary.skipped > 0 {
        println!(
            "  Skipped lines:     {}",
            summary.skipped.to_string().yellow()
        );
    }
    if summary.placeholder_names > 0 {
        println!("  Placeholder names: {}", summary.placeholder_names);
    }
    if summary.truncated_names > 0 {
        println!("  Truncated names:   {}", summary.truncated_names);
    }
}
