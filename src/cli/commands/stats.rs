//! Stats command implementation

use super::shared::{open_store, print_json};
use crate::Result;
use crate::app::services::location_store::{LocationStore, StatusSummary};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::config::AppConfig;
use colored::*;

/// Run the stats command
pub fn run_stats(args: StatsArgs, config: &AppConfig) -> Result<()> {
    let store = open_store(config);
    let summary = StatusSummary::from_entries(&store.list_all());

    match args.output_format {
        OutputFormat::Human => {
            println!("{}", "Location Statistics".bright_green().bold());
            println!("  Total:    {}", summary.total.to_string().bright_white().bold());
            println!("  OK:       {}", summary.ok.to_string().bright_green());
            println!("  Not yet:  {}", summary.not_yet.to_string().yellow());
            println!("  Complete: {:.1}%", summary.completion_percentage());
        }
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}
