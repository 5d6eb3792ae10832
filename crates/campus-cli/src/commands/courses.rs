//! Courses command implementation

use std::io::{self, Write};

use anyhow::Result;
use campus_core::courses::{filter_catalog, stream_options};
use campus_core::{Catalog, CourseEntry, build_catalog};
use colored::Colorize;
use serde::Serialize;

use crate::output::{OutputFormat, write_json, write_jsonl};

#[derive(Serialize)]
struct CourseListing<'a> {
    streams: Vec<String>,
    total: usize,
    courses: Vec<&'a CourseEntry>,
}

/// Execute the courses command
pub fn execute(
    stream: Option<&str>,
    search: Option<&str>,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<()> {
    let entries = build_catalog(catalog.institutions());
    let courses = filter_catalog(&entries, stream.unwrap_or_default(), search.unwrap_or_default());
    let listing = CourseListing {
        streams: stream_options(&entries),
        total: courses.len(),
        courses,
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            if listing.courses.is_empty() {
                writeln!(out, "No courses found.")?;
            }
            for course in &listing.courses {
                writeln!(
                    out,
                    "{} [{}] - {} institution(s)",
                    course.name.green(),
                    course.stream,
                    course.institution_ids.len()
                )?;
                writeln!(out, "  {}", course.path.bright_black())?;
            }
        },
        OutputFormat::Json => write_json(&mut out, &listing)?,
        OutputFormat::Jsonl => write_jsonl(&mut out, listing.courses.iter().copied())?,
    }
    Ok(())
}
