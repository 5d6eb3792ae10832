//! # CLI Structure and Argument Parsing
//!
//! Command-line surface for the campus listing engine, built with `clap`
//! derive macros.
//!
//! - **Global options** apply to every command: `--data`, `--config`,
//!   `--verbose`, `--quiet`, `--no-color`
//! - **Subcommands** map one-to-one onto engine operations
//!
//! ```bash
//! # Filter the catalog
//! campus --data colleges.json filter --stream Management --city Pune
//!
//! # Inspect a path
//! campus route /btech/top-colleges-in-delhi-ncr
//!
//! # Pure helpers, no catalog needed
//! campus classify "PGDM Finance" "B.Tech CSE"
//! campus slug --program "PGDM [PGP-FABM] Food & Agri"
//!
//! # Detail data
//! campus --data colleges.json rankings 25946-iim-lucknow
//! ```
//!
//! Every command takes `-f/--format text|json|jsonl`; when stdout is not a
//! terminal the default is JSON.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `campus` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "campus")]
#[command(version)]
#[command(about = "campus - college listing filters, canonical routes and ranking tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Institution catalog JSON file. Also via `CAMPUS_DATA`.
    #[arg(long, global = true, value_name = "FILE", env = "CAMPUS_DATA")]
    pub data: Option<PathBuf>,

    /// Path to configuration file (overrides autodiscovery). Also via `CAMPUS_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "CAMPUS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Filter the institution catalog
    Filter(FilterArgs),

    /// Parse a portal path and show the route, criteria and canonical path
    Route {
        /// Path to parse, e.g. `/mba/top-colleges-in-pune`
        path: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Classify program names into streams
    Classify {
        /// Program names
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Convert text to a URL slug
    Slug {
        /// Text to convert
        text: String,

        /// Use program-name rules (drop `[...]` codes, `&` becomes `and`)
        #[arg(long)]
        program: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Show the ranking table for one institution
    Rankings {
        /// Institution id, `{id}-{slug}` segment, or `/university/...` path
        institution: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// List the filter options present in the catalog
    Facets {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Show the grouped course catalog
    Courses {
        /// Only courses classified into this stream
        #[arg(long)]
        stream: Option<String>,

        /// Only courses whose name contains this text
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        format: FormatArg,
    },
}

impl Commands {
    /// The output format flag shared by every command.
    #[must_use]
    pub const fn format(&self) -> &FormatArg {
        match self {
            Self::Filter(args) => &args.format,
            Self::Route { format, .. }
            | Self::Classify { format, .. }
            | Self::Slug { format, .. }
            | Self::Rankings { format, .. }
            | Self::Facets { format }
            | Self::Courses { format, .. } => format,
        }
    }
}

/// Arguments for `campus filter`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Institution name contains
    #[arg(long)]
    pub name: Option<String>,

    /// City, matched against the location
    #[arg(long, conflicts_with = "region")]
    pub city: Option<String>,

    /// Region group or state
    #[arg(long)]
    pub region: Option<String>,

    /// Program name contains
    #[arg(long)]
    pub course: Option<String>,

    /// Stream label or family key (`Management`, `mba`, `B.Tech`)
    #[arg(long)]
    pub stream: Option<String>,

    /// Institution type, exact match
    #[arg(long = "type", value_name = "TYPE")]
    pub institution_type: Option<String>,

    /// Minimum rating
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f64>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Results per page (defaults to `listing.page_size`)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub format: FormatArg,
}
