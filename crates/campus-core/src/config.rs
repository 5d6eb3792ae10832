//! Configuration for catalog location, listing defaults, page copy and extra
//! region groups.
//!
//! Configuration is TOML. It is read from an explicit path when one is given,
//! otherwise from the platform config directory; a missing file yields the
//! defaults.
//!
//! ```toml
//! [data]
//! catalog = "/srv/campus/colleges.json"
//!
//! [listing]
//! page_size = 20
//!
//! [site]
//! brand = "StudyCups"
//! year = 2026
//!
//! [[regions]]
//! name = "Mumbai Metropolitan Region"
//! cities = ["Mumbai", "Thane", "Navi Mumbai"]
//! ```
//!
//! ```rust
//! use campus_core::Config;
//!
//! let config: Config = toml::from_str("[listing]\npage_size = 50\n")?;
//! assert_eq!(config.listing.page_size, 50);
//! assert!(config.data.catalog.is_none());
//! # Ok::<(), toml::de::Error>(())
//! ```

use crate::region::{RegionGroup, RegionMap};
use crate::seo::SiteCopy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_PAGE_SIZE: usize = 20;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the institution catalog lives.
    #[serde(default)]
    pub data: DataConfig,
    /// Listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Values used in page copy.
    #[serde(default)]
    pub site: SiteCopy,
    /// Region groups appended after the built-in ones.
    #[serde(default)]
    pub regions: Vec<RegionGroup>,
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the catalog JSON file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Results per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load from the default location, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. The file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read, is not valid
    /// TOML, or has an invalid page size.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Platform config file path.
    ///
    /// - Linux: `~/.config/campus/config.toml`
    /// - macOS: `~/Library/Application Support/dev.campus.campus/config.toml`
    /// - Windows: `%APPDATA%\campus\campus\config\config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "campus", "campus")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE))
    }

    /// Region lookup with the configured groups appended.
    #[must_use]
    pub fn region_map(&self) -> RegionMap {
        RegionMap::with_groups(self.regions.iter().cloned())
    }

    fn validate(&self) -> Result<()> {
        if self.listing.page_size == 0 {
            return Err(Error::Config("listing.page_size must be at least 1".into()));
        }
        if let Some(group) = self.regions.iter().find(|g| g.name.trim().is_empty()) {
            return Err(Error::Config(format!(
                "region group with cities {:?} has no name",
                group.cities
            )));
        }
        Ok(())
    }
}
