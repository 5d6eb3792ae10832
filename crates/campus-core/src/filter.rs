//! Listing filter engine.
//!
//! Predicates run in a fixed order and short-circuit on the first rejection:
//!
//! 1. institution name fragment
//! 2. city, against the location string
//! 3. program name fragment
//! 4. stream, through stream family aliases
//! 5. institution type
//! 6. minimum rating
//! 7. region, only when no city is selected
//!
//! Every predicate only removes institutions, so adding a constraint never
//! grows the result. Input order is preserved.

use crate::classify::{letters_only, resolve_aliases};
use crate::criteria::FilterCriteria;
use crate::model::Institution;
use crate::region::RegionMap;
use crate::slug::normalize_key;

/// Institutions matching every active criterion, in input order.
#[must_use]
pub fn apply_filters<'a>(
    institutions: &'a [Institution],
    criteria: &FilterCriteria,
    regions: &RegionMap,
) -> Vec<&'a Institution> {
    let matcher = Matcher::new(criteria);
    institutions
        .iter()
        .filter(|institution| matcher.matches(institution, criteria, regions))
        .collect()
}

/// Pre-normalized criteria values, computed once per call.
struct Matcher {
    name: Option<String>,
    city: Option<String>,
    course: Option<String>,
    stream_aliases: Option<Vec<String>>,
}

impl Matcher {
    fn new(criteria: &FilterCriteria) -> Self {
        let lowered = |value: &str| (!value.is_empty()).then(|| value.to_lowercase());
        Self {
            name: lowered(criteria.name()),
            city: criteria
                .city()
                .map(normalize_key)
                .filter(|key| !key.is_empty()),
            course: lowered(criteria.course()),
            stream_aliases: criteria.stream().named().map(|stream| {
                resolve_aliases(stream)
                    .iter()
                    .map(|alias| letters_only(alias))
                    .filter(|alias| !alias.is_empty())
                    .collect()
            }),
        }
    }

    fn matches(
        &self,
        institution: &Institution,
        criteria: &FilterCriteria,
        regions: &RegionMap,
    ) -> bool {
        self.name_matches(institution)
            && self.city_matches(institution)
            && self.course_matches(institution)
            && self.stream_matches(institution)
            && type_matches(institution, criteria)
            && rating_matches(institution, criteria.min_rating())
            && region_matches(institution, criteria, regions)
    }

    fn name_matches(&self, institution: &Institution) -> bool {
        self.name
            .as_ref()
            .is_none_or(|name| institution.name.to_lowercase().contains(name))
    }

    fn city_matches(&self, institution: &Institution) -> bool {
        self.city
            .as_ref()
            .is_none_or(|city| normalize_key(&institution.location).contains(city))
    }

    fn course_matches(&self, institution: &Institution) -> bool {
        let Some(course) = &self.course else {
            return true;
        };
        institution
            .effective_programs()
            .iter()
            .any(|program| program.name.to_lowercase().contains(course))
    }

    fn stream_matches(&self, institution: &Institution) -> bool {
        let Some(allowed) = &self.stream_aliases else {
            return true;
        };
        institution
            .stream
            .iter()
            .map(|stream| letters_only(stream))
            .filter(|stream| !stream.is_empty())
            .any(|stream| {
                allowed
                    .iter()
                    .any(|alias| stream.contains(alias.as_str()) || alias.contains(stream.as_str()))
            })
    }
}

fn type_matches(institution: &Institution, criteria: &FilterCriteria) -> bool {
    criteria
        .institution_type()
        .named()
        .is_none_or(|wanted| institution.institution_type.trim() == wanted)
}

fn rating_matches(institution: &Institution, min_rating: f64) -> bool {
    min_rating <= 0.0 || institution.rating.is_some_and(|rating| rating >= min_rating)
}

fn region_matches(institution: &Institution, criteria: &FilterCriteria, regions: &RegionMap) -> bool {
    if criteria.city().is_some() {
        return true;
    }
    criteria
        .region()
        .is_none_or(|region| regions.matches_region(&institution.location, region))
}

/// One page of `items`, 1-based. Pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}
