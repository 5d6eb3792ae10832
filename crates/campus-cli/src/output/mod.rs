//! # Output Formatting
//!
//! Commands build serializable values and hand them to the helpers here;
//! text rendering lives next to each command.
//!
//! - **Text**: human-readable, colored when the terminal allows it
//! - **JSON**: one pretty-printed document
//! - **JSONL**: one compact JSON value per line, for streaming
//!
//! ```bash
//! campus filter --stream mba -f json | jq '.results[].name'
//! campus courses -f jsonl | wc -l
//! ```

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted text (default for terminals).
    #[default]
    Text,
    /// JSON format for machine consumption (default for pipes).
    Json,
    /// JSON Lines format (one JSON object per line).
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(writer: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write each item as one compact JSON line.
pub fn write_jsonl<'a, T, I>(writer: &mut impl Write, items: I) -> Result<()>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for item in items {
        serde_json::to_writer(&mut *writer, item)?;
        writeln!(writer)?;
    }
    Ok(())
}
