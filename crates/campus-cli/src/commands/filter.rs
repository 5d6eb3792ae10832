//! Filter command implementation

use std::io::{self, Write};

use anyhow::{Context, Result};
use campus_core::filter::page_count;
use campus_core::route::{ALL_COLLEGES_PATH, detail_path};
use campus_core::seo::heading;
use campus_core::{
    Catalog, Config, FilterChange, FilterCriteria, FilterSync, Institution, RecordingNavigator,
    Route, apply_filters, paginate,
};
use colored::Colorize;
use serde::Serialize;

use crate::cli::FilterArgs;
use crate::output::{OutputFormat, write_json, write_jsonl};

/// Execute the filter command
pub fn execute(
    args: &FilterArgs,
    catalog: &Catalog,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let regions = config.region_map();

    let mut sync = FilterSync::new(RecordingNavigator::new());
    sync.initialize(&Route::parse(ALL_COLLEGES_PATH, &regions))?;
    for change in changes_from_args(args) {
        sync.apply(&change)?;
    }
    let criteria = sync.criteria();
    tracing::debug!(writes = ?sync.navigator().writes(), "criteria applied");

    let matched = apply_filters(catalog.institutions(), criteria, &regions);
    let page_size = match args.limit {
        Some(limit) => usize::try_from(limit).context("--limit is too large")?,
        None => config.listing.page_size,
    };
    let page = usize::try_from(args.page).context("--page is too large")?;

    let listing = ListingPage {
        path: sync
            .current_path()
            .unwrap_or(ALL_COLLEGES_PATH)
            .to_string(),
        title: config.site.title(criteria),
        heading: heading(criteria),
        description: config.site.description(criteria),
        criteria,
        total: matched.len(),
        page,
        pages: page_count(matched.len(), page_size),
        page_size,
        results: paginate(&matched, page, page_size)
            .iter()
            .map(|institution| ListingItem::from(*institution))
            .collect(),
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text(&mut out, &listing)?,
        OutputFormat::Json => write_json(&mut out, &listing)?,
        OutputFormat::Jsonl => write_jsonl(&mut out, &listing.results)?,
    }
    Ok(())
}

/// Stream goes first: selecting a stream clears the location.
fn changes_from_args(args: &FilterArgs) -> Vec<FilterChange> {
    let mut changes = Vec::new();
    if let Some(stream) = &args.stream {
        changes.push(FilterChange::Stream(stream.clone()));
    }
    if let Some(city) = &args.city {
        changes.push(FilterChange::City(city.clone()));
    }
    if let Some(region) = &args.region {
        changes.push(FilterChange::Region(region.clone()));
    }
    if let Some(name) = &args.name {
        changes.push(FilterChange::Name(name.clone()));
    }
    if let Some(course) = &args.course {
        changes.push(FilterChange::Course(course.clone()));
    }
    if let Some(kind) = &args.institution_type {
        changes.push(FilterChange::Type(kind.clone()));
    }
    if let Some(rating) = args.min_rating {
        changes.push(FilterChange::MinRating(rating));
    }
    changes
}

#[derive(Serialize)]
struct ListingPage<'a> {
    path: String,
    title: String,
    heading: String,
    description: String,
    criteria: &'a FilterCriteria,
    total: usize,
    page: usize,
    pages: usize,
    page_size: usize,
    results: Vec<ListingItem<'a>>,
}

#[derive(Serialize)]
struct ListingItem<'a> {
    id: &'a str,
    name: &'a str,
    location: &'a str,
    stream: &'a [String],
    #[serde(rename = "type")]
    institution_type: &'a str,
    rating: Option<f64>,
    path: String,
}

impl<'a> From<&'a Institution> for ListingItem<'a> {
    fn from(institution: &'a Institution) -> Self {
        Self {
            id: &institution.id,
            name: &institution.name,
            location: &institution.location,
            stream: &institution.stream,
            institution_type: &institution.institution_type,
            rating: institution.rating,
            path: detail_path(&institution.id, &institution.name),
        }
    }
}

fn print_text(out: &mut impl Write, listing: &ListingPage<'_>) -> Result<()> {
    writeln!(out, "{}", listing.heading.bold())?;
    writeln!(out, "{}", listing.path.bright_black())?;
    writeln!(out)?;

    if listing.results.is_empty() {
        writeln!(out, "No colleges match these filters.")?;
        return Ok(());
    }

    let offset = (listing.page - 1) * listing.page_size;
    for (idx, item) in listing.results.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} - {}",
            offset + idx + 1,
            item.name.green(),
            item.location
        )?;
        let mut details = Vec::new();
        if !item.institution_type.is_empty() {
            details.push(item.institution_type.to_string());
        }
        if let Some(rating) = item.rating {
            details.push(format!("rating {rating:.1}"));
        }
        if !item.stream.is_empty() {
            details.push(item.stream.join(", "));
        }
        if !details.is_empty() {
            writeln!(out, "     {}", details.join(" | "))?;
        }
        writeln!(out, "     {}", item.path.bright_black())?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Page {} of {} ({} colleges)",
        listing.page, listing.pages, listing.total
    )?;
    Ok(())
}
