//! Location management commands: list, show, add, edit and status changes

use super::shared::{format_entry_details, format_entry_row, open_store, print_json, status_label};
use crate::app::services::import_normalizer::parse_maps_link;
use crate::app::services::location_editor::{LocationDraft, save_location, toggle_door_status};
use crate::app::services::location_store::{LocationQuery, LocationStore};
use crate::app::services::providers::{SystemClock, UuidGenerator};
use crate::cli::args::{AddArgs, EditArgs, IdArgs, ListArgs, OutputFormat, SetStatusArgs, ShowArgs};
use crate::config::AppConfig;
use crate::{Error, Result};
use colored::*;
use tracing::info;

/// Run the list command
pub fn run_list(args: ListArgs, config: &AppConfig) -> Result<()> {
    let store = open_store(config);

    let mut query = LocationQuery::new();
    if let Some(search) = args.search {
        query = query.with_search(search);
    }
    if let Some(status) = args.status {
        query = query.with_status(status);
    }
    let entries = query.apply(store.list_all());

    match args.output_format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("{}", "No locations found".yellow());
                return Ok(());
            }
            println!(
                "{} ({})",
                "Locations".bright_green().bold(),
                entries.len()
            );
            for entry in &entries {
                println!("{}", format_entry_row(entry));
            }
        }
    }
    Ok(())
}

/// Run the show command
pub fn run_show(args: ShowArgs, config: &AppConfig) -> Result<()> {
    let store = open_store(config);
    let entry = store
        .get_by_id(&args.id)
        .ok_or_else(|| Error::location_not_found(&args.id))?;

    match args.output_format {
        OutputFormat::Human => println!("{}", format_entry_details(&entry)),
        OutputFormat::Json => print_json(&entry)?,
    }
    Ok(())
}

/// Run the add command
///
/// With `--from-link` the coordinates come from the link's `@lat,lon` marker
/// and the name defaults to the link's place name.
pub fn run_add(args: AddArgs, config: &AppConfig) -> Result<()> {
    let (gps, link_name) = match (&args.gps, &args.from_link) {
        (Some(gps), _) => (gps.clone(), None),
        (None, Some(link)) => {
            let parsed = parse_maps_link(link).ok_or_else(|| {
                Error::data_validation(format!("No '@lat,lon' coordinates found in link: {}", link))
            })?;
            (parsed.gps.to_string(), parsed.place_name)
        }
        (None, None) => {
            return Err(Error::configuration("Pass either --gps or --from-link"));
        }
    };

    let name = args
        .name
        .or(link_name)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| Error::data_validation("A location name is required (--name)"))?;

    let mut store = open_store(config);
    let entry = save_location(
        &mut store,
        &SystemClock,
        &mut UuidGenerator,
        LocationDraft::new(name, gps).with_status(args.status),
    )?;

    info!("Added location {}", entry.id);
    println!("{} {}", "Added".bright_green().bold(), format_entry_row(&entry));
    Ok(())
}

/// Run the edit command
pub fn run_edit(args: EditArgs, config: &AppConfig) -> Result<()> {
    args.validate()?;

    let mut store = open_store(config);
    let existing = store
        .get_by_id(&args.id)
        .ok_or_else(|| Error::location_not_found(&args.id))?;

    let mut draft = LocationDraft::from_entry(&existing);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(gps) = args.gps {
        draft.gps = gps;
    }
    if let Some(status) = args.status {
        draft.door_status = status;
    }

    let entry = save_location(&mut store, &SystemClock, &mut UuidGenerator, draft)?;
    println!("{} {}", "Updated".bright_green().bold(), format_entry_row(&entry));
    Ok(())
}

/// Run the toggle command
pub fn run_toggle(args: IdArgs, config: &AppConfig) -> Result<()> {
    let mut store = open_store(config);
    let status = toggle_door_status(&mut store, &args.id)?
        .ok_or_else(|| Error::location_not_found(&args.id))?;

    println!("{} is now {}", args.id, status_label(status));
    Ok(())
}

/// Run the set-status command
pub fn run_set_status(args: SetStatusArgs, config: &AppConfig) -> Result<()> {
    let mut store = open_store(config);
    if !store.update_status(&args.id, args.status)? {
        return Err(Error::location_not_found(&args.id));
    }

    println!("{} is now {}", args.id, status_label(args.status));
    Ok(())
}

/// Run the delete command
pub fn run_delete(args: IdArgs, config: &AppConfig) -> Result<()> {
    let mut store = open_store(config);
    if !store.delete(&args.id)? {
        return Err(Error::location_not_found(&args.id));
    }

    println!("{} {}", "Deleted".bright_red().bold(), args.id);
    Ok(())
}
