//! Shared helpers for the CLI commands.

pub mod cli_args;
pub mod loader;
pub mod logging;
