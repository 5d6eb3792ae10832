//! Rankings command implementation

use std::io::{self, Write};

use anyhow::{Context, Result};
use campus_core::route::detail_id;
use campus_core::{Catalog, RankingTable, build_table};
use colored::Colorize;
use serde::Serialize;

use crate::output::{OutputFormat, write_json, write_jsonl};

/// Execute the rankings command
pub fn execute(institution: &str, catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let id = detail_id(institution)?;
    let record = catalog
        .get(id)
        .with_context(|| format!("No institution matches '{institution}'"))?;
    let table = build_table(&record.ranking_entries());

    let rows = table_rows(&table);
    let report = RankingReport {
        id: &record.id,
        name: &record.name,
        years: &table.years,
        rows,
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Jsonl => write_jsonl(&mut out, &report.rows)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct RankingReport<'a> {
    id: &'a str,
    name: &'a str,
    years: &'a [u16],
    rows: Vec<RowView>,
}

#[derive(Serialize)]
struct RowView {
    stream: String,
    cells: Vec<CellText>,
}

#[derive(Serialize)]
struct CellText {
    year: u16,
    text: String,
}

fn table_rows(table: &RankingTable) -> Vec<RowView> {
    table
        .rows
        .iter()
        .map(|row| RowView {
            stream: row.stream.clone(),
            cells: table
                .years
                .iter()
                .map(|&year| CellText {
                    year,
                    text: table.cell(&row.stream, year).to_string(),
                })
                .collect(),
        })
        .collect()
}

fn print_text(out: &mut impl Write, report: &RankingReport<'_>) -> Result<()> {
    writeln!(out, "{}", report.name.bold())?;
    if report.rows.is_empty() || report.years.is_empty() {
        writeln!(out, "No ranking data available.")?;
        return Ok(());
    }

    let stream_width = report
        .rows
        .iter()
        .map(|row| row.stream.len())
        .max()
        .unwrap_or(0)
        .max("Stream".len());
    let cell_width = report
        .rows
        .iter()
        .flat_map(|row| row.cells.iter().map(|cell| cell.text.chars().count()))
        .max()
        .unwrap_or(0)
        .max(4);

    write!(out, "{:<stream_width$}", "Stream".bright_black())?;
    for year in report.years {
        write!(out, "  {:<cell_width$}", year.to_string().bright_black())?;
    }
    writeln!(out)?;

    for row in &report.rows {
        write!(out, "{:<stream_width$}", row.stream)?;
        for cell in &row.cells {
            write!(out, "  {:<cell_width$}", cell.text)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
