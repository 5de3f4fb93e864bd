use anyhow::Context;
use clap::Parser;
use localtrack::cli::{
    args::Args,
    commands::{self, shared},
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    shared::setup_logging(&args)?;

    let config = shared::load_config(&args).context("Failed to load configuration")?;
    commands::run(args, config)?;
    Ok(())
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LocalTrack - Location and Door Status Tracker");
    println!("=============================================");
    println!();
    println!("Keep a local list of locations with GPS coordinates and door status,");
    println!("and import them in bulk from pasted CSV exports or map links.");
    println!();
    println!("USAGE:");
    println!("    localtrack [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    import       Import locations from a file or stdin");
    println!("    list         List locations, newest first");
    println!("    show         Show one location");
    println!("    add          Add a location by hand or from a map link");
    println!("    edit         Edit a location");
    println!("    toggle       Flip a location's door status");
    println!("    set-status   Set a location's door status");
    println!("    delete       Delete a location");
    println!("    stats        Show door status statistics");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a CSV export with WKT geometry:");
    println!("    localtrack import --file export.csv");
    println!();
    println!("    # Paste coordinates from the clipboard:");
    println!("    pbpaste | localtrack import");
    println!();
    println!("    # Add a location from a Google Maps link:");
    println!("    localtrack add --from-link 'https://www.google.com/maps/place/Parc/@33.61,-7.49,17z'");
    println!();
    println!("    # Locations still to check, as JSON:");
    println!("    localtrack list --status not-yet --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    localtrack <COMMAND> --help");
}
