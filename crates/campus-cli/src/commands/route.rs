//! Route command implementation

use std::io::{self, Write};

use anyhow::Result;
use campus_core::{Config, Route};
use colored::Colorize;
use serde::Serialize;

use crate::output::{OutputFormat, write_json, write_jsonl};

/// Execute the route command
pub fn execute(path: &str, config: &Config, format: OutputFormat) -> Result<()> {
    let route = Route::parse(path, &config.region_map());
    let title = match &route {
        Route::Listing { criteria } => Some(config.site.title(criteria)),
        _ => None,
    };

    let report = RouteReport {
        path,
        kind: route.kind(),
        canonical: route.canonical_path(),
        title,
        route: &route,
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Jsonl => write_jsonl(&mut out, [&report])?,
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteReport<'a> {
    path: &'a str,
    kind: &'static str,
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    route: &'a Route,
}

fn print_text(out: &mut impl Write, report: &RouteReport<'_>) -> Result<()> {
    writeln!(out, "{} {}", "kind:".bright_black(), report.kind.bold())?;
    match &report.canonical {
        Some(canonical) => writeln!(out, "{} {canonical}", "canonical:".bright_black())?,
        None => writeln!(out, "{} {}", "canonical:".bright_black(), "none".yellow())?,
    }

    match report.route {
        Route::Listing { criteria } => {
            writeln!(out, "{} {}", "stream:".bright_black(), criteria.stream())?;
            if let Some(city) = criteria.city() {
                writeln!(out, "{} {city}", "city:".bright_black())?;
            }
            if let Some(region) = criteria.region() {
                writeln!(out, "{} {region}", "region:".bright_black())?;
            }
        },
        Route::Detail { id, .. } => writeln!(out, "{} {id}", "id:".bright_black())?,
        Route::Course { category, course } => {
            writeln!(out, "{} {category}", "category:".bright_black())?;
            writeln!(out, "{} {course}", "course:".bright_black())?;
        },
        Route::Redirect { .. } | Route::Unknown { .. } => {},
    }

    if let Some(title) = &report.title {
        writeln!(out, "{} {title}", "title:".bright_black())?;
    }
    Ok(())
}
