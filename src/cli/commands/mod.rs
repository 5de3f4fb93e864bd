//! Command implementations for the LocalTrack CLI
//!
//! Each command is implemented in its own module:
//! - `import`: Bulk import from pasted text
//! - `locations`: Listing, manual entry, editing and status changes
//! - `stats`: Door status statistics

pub mod import;
pub mod locations;
pub mod shared;
pub mod stats;

use crate::Result;
use crate::cli::args::{Args, Commands};
use crate::config::AppConfig;

/// Main command runner
///
/// Dispatches to the subcommand handler. `config` is the already loaded and
/// validated configuration, with any `--data-dir` override applied.
pub fn run(args: Args, config: AppConfig) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Commands::Import(import_args) => import::run_import(import_args, &config),
        Commands::List(list_args) => locations::run_list(list_args, &config),
        Commands::Show(show_args) => locations::run_show(show_args, &config),
        Commands::Add(add_args) => locations::run_add(add_args, &config),
        Commands::Edit(edit_args) => locations::run_edit(edit_args, &config),
        Commands::Toggle(id_args) => locations::run_toggle(id_args, &config),
        Commands::SetStatus(status_args) => locations::run_set_status(status_args, &config),
        Commands::Delete(id_args) => locations::run_delete(id_args, &config),
        Commands::Stats(stats_args) => stats::run_stats(stats_args, &config),
    }
}
