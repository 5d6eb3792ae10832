//! Cross-institution course catalog.
//!
//! Every institution's top-level programs are flattened, classified, and
//! grouped by a case-insensitive name key. Programs that carry sub-programs
//! are umbrella entries and are left out.

use serde::Serialize;

use crate::classify::{Stream, classify};
use crate::criteria::ALL;
use crate::model::Institution;
use crate::route::course_path;

/// One course name and the institutions offering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseEntry {
    /// Grouping key: trimmed, lowercased name.
    pub key: String,
    /// Name as first seen.
    pub name: String,
    /// Classified stream.
    pub stream: Stream,
    /// Course detail path.
    pub path: String,
    /// Fee text from the first institution listing it.
    pub fees: String,
    /// Offering institutions, first-seen order, no duplicates.
    pub institution_ids: Vec<String>,
}

/// Build the grouped catalog. Group order follows first appearance.
#[must_use]
pub fn build_catalog(institutions: &[Institution]) -> Vec<CourseEntry> {
    let mut entries: Vec<CourseEntry> = Vec::new();

    for institution in institutions {
        for program in institution.effective_programs() {
            if !program.sub_programs.is_empty() {
                continue;
            }
            let name = program.name.trim();
            if name.is_empty() {
                continue;
            }
            let key = name.to_lowercase();

            if let Some(entry) = entries.iter_mut().find(|entry| entry.key == key) {
                if !entry.institution_ids.contains(&institution.id) {
                    entry.institution_ids.push(institution.id.clone());
                }
                continue;
            }

            let stream = classify(name);
            entries.push(CourseEntry {
                key,
                name: name.to_string(),
                stream,
                path: course_path(&stream.category_slug(), name),
                fees: program.fees.trim().to_string(),
                institution_ids: vec![institution.id.clone()],
            });
        }
    }

    tracing::debug!(courses = entries.len(), "course catalog built");
    entries
}

/// `All` followed by the catalog's streams in first-seen order.
#[must_use]
pub fn stream_options(entries: &[CourseEntry]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for entry in entries {
        let label = entry.stream.label();
        if !options.iter().any(|option| option == label) {
            options.push(label.to_string());
        }
    }
    options
}

/// Entries whose stream label matches `stream` (case-insensitive) and whose
/// name contains `search`. `All` or blank disables the stream check.
#[must_use]
pub fn filter_catalog<'a>(
    entries: &'a [CourseEntry],
    stream: &str,
    search: &str,
) -> Vec<&'a CourseEntry> {
    let stream = stream.trim();
    let search = search.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            stream.is_empty()
                || stream.eq_ignore_ascii_case(ALL)
                || entry.stream.label().eq_ignore_ascii_case(stream)
        })
        .filter(|entry| search.is_empty() || entry.key.contains(&search))
        .collect()
}
