//! campus CLI - college listing filters, canonical routes and ranking tables
//!
//! This is the library half of the `campus` binary. Parsing, logging setup
//! and command dispatch live here so integration tests and the binary share
//! one code path.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::loader::{catalog_path, load_catalog, load_config};
use utils::logging::initialize_logging;

/// Execute the campus CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the configuration or
/// catalog cannot be loaded, or the command fails.
pub fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let format = cli.command.format().resolve();

    match &cli.command {
        Commands::Classify { names, .. } => commands::classify_names(names, format),
        Commands::Slug { text, program, .. } => commands::make_slug(text, *program, format),
        Commands::Route { path, .. } => {
            let config = load_config(cli)?;
            commands::inspect_route(path, &config, format)
        },
        Commands::Filter(args) => {
            let config = load_config(cli)?;
            let catalog = load_catalog(&catalog_path(cli, &config)?)?;
            commands::filter_listing(args, &catalog, &config, format)
        },
        Commands::Rankings { institution, .. } => {
            let config = load_config(cli)?;
            let catalog = load_catalog(&catalog_path(cli, &config)?)?;
            commands::show_rankings(institution, &catalog, format)
        },
        Commands::Facets { .. } => {
            let config = load_config(cli)?;
            let catalog = load_catalog(&catalog_path(cli, &config)?)?;
            commands::show_facets(&catalog, format)
        },
        Commands::Courses { stream, search, .. } => {
            let config = load_config(cli)?;
            let catalog = load_catalog(&catalog_path(cli, &config)?)?;
            commands::list_courses(stream.as_deref(), search.as_deref(), &catalog, format)
        },
    }
}
