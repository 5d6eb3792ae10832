//! Canonical listing paths and the portal's path grammar.
//!
//! ```text
//! /colleges                                  unfiltered listing
//! /{stream}/top-colleges                     stream listing
//! /{stream}/top-colleges-in-{location}       stream listing narrowed by city or region
//! /university/{id}-{slug}                    institution detail
//! /courses/{category}/{course}               course detail
//! /colleges/{stream}[/{location}]            legacy, redirects to a stream listing
//! /{stream}-colleges                         legacy, redirects to a stream listing
//! ```
//!
//! Building a path and parsing it back round-trips for every criteria value
//! that a path can express:
//!
//! ```rust
//! use campus_core::criteria::FilterCriteria;
//! use campus_core::region::RegionMap;
//! use campus_core::route::{listing_path, parse_listing};
//!
//! let mut criteria = FilterCriteria::new();
//! criteria.select_stream("Management");
//! criteria.select_city("Pune");
//!
//! let path = listing_path(&criteria);
//! assert_eq!(path, "/mba/top-colleges-in-pune");
//!
//! let parsed = parse_listing("mba", "top-colleges-in-pune", &RegionMap::default());
//! assert_eq!(parsed.stream().named(), Some("Management"));
//! assert_eq!(parsed.city(), Some("Pune"));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::classify::{STREAM_FAMILIES, family_for};
use crate::criteria::FilterCriteria;
use crate::region::RegionMap;
use crate::slug::{display_case, id_slug, is_slug, split_id_slug, to_program_slug, to_slug};
use crate::{Error, Result};

/// Path of the unfiltered listing.
pub const ALL_COLLEGES_PATH: &str = "/colleges";

const LISTING_SUFFIX: &str = "top-colleges";
const LOCATION_INFIX: &str = "-in-";
const LEGACY_SUFFIX: &str = "-colleges";

/// URL segment for a stream label.
///
/// Labels that belong to a stream family use the family key, so
/// `Management`, `MBA` and `PGDM` all map to `mba`.
#[must_use]
pub fn stream_segment(stream: &str) -> String {
    family_for(stream).map_or_else(|| to_slug(stream), |family| family.key.to_string())
}

/// Canonical listing path for the criteria.
///
/// Only stream and location are encoded; the remaining filters are not part
/// of the path.
#[must_use]
pub fn listing_path(criteria: &FilterCriteria) -> String {
    let Some(stream) = criteria.stream().named() else {
        return ALL_COLLEGES_PATH.to_string();
    };
    let stream_slug = stream_segment(stream);
    if stream_slug.is_empty() {
        return ALL_COLLEGES_PATH.to_string();
    }

    match criteria.location().map(to_slug).filter(|s| !s.is_empty()) {
        Some(location) => format!("/{stream_slug}/{LISTING_SUFFIX}{LOCATION_INFIX}{location}"),
        None => format!("/{stream_slug}/{LISTING_SUFFIX}"),
    }
}

/// Criteria described by a listing path's two segments.
///
/// A stream segment that is not a slug yields the unfiltered criteria; a
/// malformed suffix only drops the location.
#[must_use]
pub fn parse_listing(stream_segment: &str, suffix: &str, regions: &RegionMap) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();

    if !is_slug(stream_segment) {
        debug!(segment = stream_segment, "stream segment is not a slug");
        return criteria;
    }

    let stream = STREAM_FAMILIES
        .iter()
        .find(|family| family.key == stream_segment)
        .map_or_else(|| display_case(stream_segment), |family| family.display.to_string());
    criteria.select_stream(stream);

    if suffix == LISTING_SUFFIX {
        return criteria;
    }

    match suffix
        .strip_prefix(LISTING_SUFFIX)
        .and_then(|rest| rest.strip_prefix(LOCATION_INFIX))
    {
        Some(location) if is_slug(location) => {
            let label = display_case(location);
            match regions.recognise(&label) {
                Some(region) => criteria.select_region(&region),
                None => criteria.select_city(&label),
            }
        },
        _ => debug!(suffix, "unrecognised listing suffix, keeping the stream only"),
    }

    criteria

}

/// Detail path for an institution.
#[must_use]
pub fn detail_path(id: &str, name: &str) -> String {
    format!("/university/{}", id_slug(id, name))
}

/// Course detail path.
#[must_use]
pub fn course_path(category_slug: &str, course_name: &str) -> String {
    format!("/courses/{category_slug}/{}", to_program_slug(course_name))
}

/// Authoritative institution id from a detail path, an `{id}-{slug}`
/// segment, or a bare id.
pub fn detail_id(input: &str) -> Result<&str> {
    let trimmed = input.trim().trim_end_matches('/');
    let segment = trimmed
        .strip_prefix("/university/")
        .unwrap_or_else(|| trimmed.trim_start_matches('/'));
    if segment.contains('/') {
        return Err(Error::InvalidRoute(input.to_string()));
    }
    split_id_slug(segment).ok_or_else(|| Error::InvalidRoute(input.to_string()))
}

/// A parsed portal path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// A listing page and the criteria it initializes
    Listing {
        /// Criteria derived from the path
        criteria: FilterCriteria,
    },
    /// Institution detail page
    Detail {
        /// Authoritative id
        id: String,
        /// Decorative slug after the id, possibly empty
        slug: String,
    },
    /// Course detail page
    Course {
        /// Category slug
        category: String,
        /// Course slug
        course: String,
    },
    /// Legacy path that should be replaced with `target`
    Redirect {
        /// Canonical replacement path
        target: String,
    },
    /// Anything the grammar does not cover
    Unknown {
        /// The path as given
        path: String,
    },
}

impl Route {
    /// Parse a path. Query strings and fragments are ignored.
    #[must_use]
    pub fn parse(path: &str, regions: &RegionMap) -> Self {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/');
        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["colleges"] => Self::Listing {
                criteria: FilterCriteria::new(),
            },
            [stream, suffix] if suffix.starts_with(LISTING_SUFFIX) => Self::Listing {
                criteria: parse_listing(stream, suffix, regions),
            },
            ["colleges", stream] => Self::legacy(stream, None),
            ["colleges", stream, location] => Self::legacy(stream, Some(*location)),
            ["university", id_and_slug] => match split_id_slug(id_and_slug) {
                Some(id) => Self::Detail {
                    id: id.to_string(),
                    slug: id_and_slug
                        .strip_prefix(id)
                        .unwrap_or_default()
                        .trim_start_matches('-')
                        .to_string(),
                },
                None => Self::unknown(path),
            },
            ["courses", category, course] => Self::Course {
                category: (*category).to_string(),
                course: (*course).to_string(),
            },
            [single] => match single.strip_suffix(LEGACY_SUFFIX) {
                Some(stream) if !stream.is_empty() => Self::legacy(stream, None),
                _ => Self::unknown(path),
            },
            _ => Self::unknown(path),
        }
    }

    fn legacy(stream: &str, location: Option<&str>) -> Self {
        let stream = to_slug(stream);
        let location = location.map(to_slug).filter(|l| !l.is_empty());
        let target = match (stream.is_empty(), location) {
            (true, _) => ALL_COLLEGES_PATH.to_string(),
            (false, Some(location)) => {
                format!("/{stream}/{LISTING_SUFFIX}{LOCATION_INFIX}{location}")
            },
            (false, None) => format!("/{stream}/{LISTING_SUFFIX}"),
        };
        Self::Redirect { target }
    }

    fn unknown(path: &str) -> Self {
        Self::Unknown {
            path: path.to_string(),
        }
    }

    /// Short label for the route kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Listing { .. } => "listing",
            Self::Detail { .. } => "detail",
            Self::Course { .. } => "course",
            Self::Redirect { .. } => "redirect",
            Self::Unknown { .. } => "unknown",
        }
    }

    /// The canonical path this route should be served at.
    #[must_use]
    pub fn canonical_path(&self) -> Option<String> {
        match self {
            Self::Listing { criteria } => Some(listing_path(criteria)),
            Self::Detail { id, slug } if slug.is_empty() => Some(format!("/university/{id}")),
            Self::Detail { id, slug } => Some(format!("/university/{id}-{slug}")),
            Self::Course { category, course } => Some(format!("/courses/{category}/{course}")),
            Self::Redirect { target } => Some(target.clone()),
            Self::Unknown { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn regions() -> RegionMap {
        RegionMap::default()
    }

    #[test]
    fn test_listing_path_variants() {
        let mut criteria = FilterCriteria::new();
        assert_eq!(listing_path(&criteria), "/colleges");

        criteria.select_stream("Engineering");
        assert_eq!(listing_path(&criteria), "/btech/top-colleges");

        criteria.select_region("Delhi NCR");
        assert_eq!(listing_path(&criteria), "/btech/top-colleges-in-delhi-ncr");

        criteria.select_stream("Law");
        criteria.select_city("Navi Mumbai");
        assert_eq!(listing_path(&criteria), "/law/top-colleges-in-navi-mumbai");
    }

    #[test]
    fn test_all_stream_ignores_location() {
        let mut criteria = FilterCriteria::new();
        criteria.select_city("Pune");
        assert_eq!(listing_path(&criteria), "/colleges");
    }

    #[test]
    fn test_round_trip_management_pune() {
        let mut criteria = FilterCriteria::new();
        criteria.select_stream("Management");
        criteria.select_city("Pune");

        let path = listing_path(&criteria);
        assert_eq!(path, "/mba/top-colleges-in-pune");

        let Route::Listing { criteria: parsed } = Route::parse(&path, &regions()) else {
            panic!("expected a listing route");
        };
        assert_eq!(parsed.stream().named(), Some("Management"));
        assert_eq!(parsed.city(), Some("Pune"));
        assert_eq!(parsed.region(), None);
    }

    #[test]
    fn test_parse_listing_recognises_regions_and_states() {
        let parsed = parse_listing("btech", "top-colleges-in-delhi-ncr", &regions());
        assert_eq!(parsed.stream().named(), Some("Engineering"));
        assert_eq!(parsed.region(), Some("Delhi NCR"));

        let parsed = parse_listing("mba", "top-colleges-in-uttar-pradesh", &regions());
        assert_eq!(parsed.region(), Some("Uttar Pradesh"));
        assert_eq!(parsed.city(), None);
    }

    #[test]
    fn test_parse_listing_unknown_stream_is_display_cased() {
        let parsed = parse_listing("hotel-management", "top-colleges", &regions());
        assert_eq!(parsed.stream().named(), Some("Hotel Management"));
        assert_eq!(parsed.location(), None);
    }

    #[test]
    fn test_parse_listing_invalid_stream_falls_back_to_all() {
        for (stream, suffix) in [
            ("MBA", "top-colleges"),
            ("", "top-colleges"),
            ("-mba", "top-colleges-in-pune"),
        ] {
            assert!(
                parse_listing(stream, suffix, &regions()).is_unfiltered(),
                "{stream}/{suffix}"
            );
        }
    }

    #[test]
    fn test_parse_listing_malformed_suffix_keeps_stream() {
        for suffix in ["top-colleges-near-pune", "top-colleges-in-", "top-colleges-in-Pune"] {
            let parsed = parse_listing("mba", suffix, &regions());
            assert_eq!(parsed.stream().named(), Some("Management"), "{suffix}");
            assert_eq!(parsed.location(), None, "{suffix}");
        }
    }

    #[test]
    fn test_parse_path_grammar() {
        let r = regions();
        assert_eq!(
            Route::parse("/colleges", &r),
            Route::Listing {
                criteria: FilterCriteria::new()
            }
        );
        assert_eq!(
            Route::parse("/university/25946-iim-lucknow?tab=fees", &r),
            Route::Detail {
                id: "25946".into(),
                slug: "iim-lucknow".into()
            }
        );
        assert_eq!(
            Route::parse("/courses/management/pgdm-finance", &r),
            Route::Course {
                category: "management".into(),
                course: "pgdm-finance".into()
            }
        );
        assert_eq!(Route::parse("/", &r).kind(), "unknown");
        assert_eq!(Route::parse("/exams/12/extra", &r).kind(), "unknown");
        assert_eq!(Route::parse("/university/-x", &r).kind(), "unknown");
    }

    #[test]
    fn test_legacy_redirects() {
        let r = regions();
        assert_eq!(
            Route::parse("/colleges/MBA", &r).canonical_path().unwrap(),
            "/mba/top-colleges"
        );
        assert_eq!(
            Route::parse("/colleges/mba/Delhi NCR/", &r)
                .canonical_path()
                .unwrap(),
            "/mba/top-colleges-in-delhi-ncr"
        );
        assert_eq!(
            Route::parse("/btech-colleges", &r).canonical_path().unwrap(),
            "/btech/top-colleges"
        );
        assert_eq!(
            Route::parse("/colleges/!!!", &r).canonical_path().unwrap(),
            "/colleges"
        );
    }

    #[test]
    fn test_builders() {
        assert_eq!(
            detail_path("25946", "IIM Lucknow"),
            "/university/25946-iim-lucknow"
        );
        assert_eq!(
            course_path("management", "PGDM [PGP-FABM] Food & Agri"),
            "/courses/management/pgdm-food-and-agri"
        );
    }

    #[test]
    fn test_detail_id() {
        assert_eq!(detail_id("/university/25946-iim-lucknow").unwrap(), "25946");
        assert_eq!(detail_id("25946-iim-lucknow").unwrap(), "25946");
        assert_eq!(detail_id("25946").unwrap(), "25946");
        assert!(matches!(detail_id(""), Err(Error::InvalidRoute(_))));
        assert!(matches!(
            detail_id("/courses/a/b"),
            Err(Error::InvalidRoute(_))
        ));
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(path in r"[/a-zA-Z0-9 ?#&.-]{0,60}") {
            let route = Route::parse(&path, &RegionMap::default());
            let _ = route.canonical_path();
        }

        #[test]
        fn test_listing_round_trip(
            stream in "[a-z]{3,10}( [a-z]{3,10})?",
            city in "[a-z]{3,10}",
        ) {
            let regions = RegionMap::default();
            prop_assume!(regions.recognise(&display_case(&city)).is_none());

            let mut criteria = FilterCriteria::new();
            criteria.select_stream(display_case(&stream));
            criteria.select_city(&display_case(&city));

            let path = listing_path(&criteria);
            let Route::Listing { criteria: parsed } = Route::parse(&path, &regions) else {
                panic!("listing path {path} did not parse as a listing");
            };
            prop_assert_eq!(listing_path(&parsed), path);
        }
    }
}
