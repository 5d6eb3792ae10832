//! Facets command implementation

use std::io::{self, Write};

use anyhow::Result;
use campus_core::{Catalog, extract_facets};
use colored::Colorize;
use serde_json::json;

use crate::output::{OutputFormat, write_json, write_jsonl};

/// Execute the facets command
pub fn execute(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let facets = extract_facets(catalog.institutions());
    let groups = [
        ("streams", &facets.streams),
        ("states", &facets.states),
        ("cities", &facets.cities),
        ("types", &facets.institution_types),
    ];

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for (label, values) in groups {
                writeln!(out, "{} ({})", label.bold(), values.len())?;
                for value in values {
                    writeln!(out, "  {value}")?;
                }
            }
        },
        OutputFormat::Json => write_json(&mut out, &facets)?,
        OutputFormat::Jsonl => {
            let lines: Vec<_> = groups
                .iter()
                .map(|(facet, values)| json!({ "facet": facet, "values": values }))
                .collect();
            write_jsonl(&mut out, &lines)?;
        },
    }
    Ok(())
}
