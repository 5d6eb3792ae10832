//! Resolves the configuration file and the institution catalog from the
//! global flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use campus_core::{Catalog, Config};

use crate::cli::Cli;

/// Load the configuration named by `--config`, or the platform default.
///
/// # Errors
///
/// Returns an error if the explicit file is missing or invalid, or the
/// default file exists but cannot be parsed.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config.as_deref() {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Catalog file from `--data`, falling back to `data.catalog` in the config.
///
/// # Errors
///
/// Returns an error when neither source names a file.
pub fn catalog_path(cli: &Cli, config: &Config) -> Result<PathBuf> {
    cli.data
        .clone()
        .or_else(|| config.data.catalog.clone())
        .ok_or_else(|| {
            anyhow!("No catalog file given. Pass --data <FILE>, set CAMPUS_DATA, or set data.catalog in the config")
        })
}

/// Read and parse the catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a catalog document.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::load(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    tracing::debug!(path = %path.display(), institutions = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn data_flag_beats_config() {
        let cli = Cli::try_parse_from(["campus", "facets", "--data", "a.json"]).unwrap();
        let mut config = Config::default();
        config.data.catalog = Some(PathBuf::from("b.json"));
        assert_eq!(catalog_path(&cli, &config).unwrap(), PathBuf::from("a.json"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let cli = Cli::try_parse_from(["campus", "facets"]).unwrap();
        if cli.data.is_none() {
            let err = catalog_path(&cli, &Config::default()).unwrap_err();
            assert!(err.to_string().contains("--data"));
        }
    }
}
