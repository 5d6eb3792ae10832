//! Slug command implementation

use std::io::{self, Write};

use anyhow::Result;
use campus_core::{to_program_slug, to_slug};
use serde_json::json;

use crate::output::{OutputFormat, write_json, write_jsonl};

/// Execute the slug command
pub fn execute(text: &str, program: bool, format: OutputFormat) -> Result<()> {
    let slug = if program {
        to_program_slug(text)
    } else {
        to_slug(text)
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => writeln!(out, "{slug}")?,
        OutputFormat::Json | OutputFormat::Jsonl => {
            let value = json!({ "input": text, "slug": slug, "program": program });
            if format == OutputFormat::Json {
                write_json(&mut out, &value)?;
            } else {
                write_jsonl(&mut out, [&value])?;
            }
        },
    }
    Ok(())
}
