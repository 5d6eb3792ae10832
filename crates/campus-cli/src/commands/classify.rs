//! Classify command implementation

use std::io::{self, Write};

use anyhow::Result;
use campus_core::route::course_path;
use campus_core::{Stream, classify};
use colored::Colorize;
use serde::Serialize;

use crate::output::{OutputFormat, write_json, write_jsonl};

#[derive(Serialize)]
struct Classification<'a> {
    name: &'a str,
    stream: Stream,
    category: String,
    path: String,
}

/// Execute the classify command
pub fn execute(names: &[String], format: OutputFormat) -> Result<()> {
    let results: Vec<Classification<'_>> = names
        .iter()
        .map(|name| {
            let stream = classify(name);
            let category = stream.category_slug();
            Classification {
                name,
                stream,
                path: course_path(&category, name),
                category,
            }
        })
        .collect();

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for result in &results {
                writeln!(
                    out,
                    "{:<12} {}  {}",
                    result.stream.label().cyan(),
                    result.name,
                    result.path.bright_black()
                )?;
            }
        },
        OutputFormat::Json => write_json(&mut out, &results)?,
        OutputFormat::Jsonl => write_jsonl(&mut out, &results)?,
    }
    Ok(())
}
