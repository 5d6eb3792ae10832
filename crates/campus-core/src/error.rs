//! Error types and handling for campus-core operations.
//!
//! Most of the engine is total by construction: unclassifiable program names
//! fall back to `General`, malformed ranking fragments are skipped, and
//! unknown route segments fall back to the unfiltered listing. The errors in
//! this module cover the remaining edges: reading catalog and configuration
//! files, and lifecycle misuse of the filter synchronizer.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading catalog or configuration files
//! - **Parse Errors**: catalog JSON that is not an institution collection
//! - **Configuration Errors**: invalid settings or config files
//! - **Route Errors**: paths that cannot be turned into a route at all
//! - **Lifecycle Errors**: synchronizer operations issued in the wrong state
//!
//! ```rust
//! use campus_core::{Error, Result};
//!
//! fn handle(result: Result<()>) {
//!     match result {
//!         Err(e) if e.is_recoverable() => eprintln!("retry later: {e}"),
//!         Err(e) => eprintln!("[{}] {e}", e.category()),
//!         Ok(()) => {},
//!     }
//! }
//! # handle(Ok(()));
//! ```

use thiserror::Error;

/// The main error type for campus-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading the catalog file and configuration files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing operation failed.
    ///
    /// Occurs when the catalog document is valid JSON but is neither an array
    /// of institutions nor a `{ "data": [...] }` envelope.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    ///
    /// Used when a detail lookup names an institution id that is not in the
    /// loaded catalog.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A path could not be interpreted as a portal route.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// A synchronizer operation was issued in the wrong lifecycle state.
    ///
    /// URL-driven initialization is only legal before the first mutation,
    /// and filter mutations are only legal after initialization.
    #[error("Lifecycle violation: {0}")]
    Lifecycle(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Only interrupted or timed-out I/O qualifies; everything else reflects
    /// bad input or misuse and will fail the same way again.
    ///
    /// ```rust
    /// use campus_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
    /// assert!(!Error::Config("bad".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidRoute(_) => "invalid_route",
            Self::Lifecycle(_) => "lifecycle",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
