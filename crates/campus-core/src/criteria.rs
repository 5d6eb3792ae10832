//! Listing filter criteria.
//!
//! Location is exclusive: a listing is narrowed by a city *or* a region, never
//! both. The mutators keep that true, and selecting a new stream drops any
//! location so the user starts the new stream from a national listing.

use serde::Serialize;
use std::fmt;

/// Sentinel label for an unconstrained selection.
pub const ALL: &str = "All";

/// A selector that is either unconstrained or pinned to one label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No constraint
    #[default]
    All,
    /// Constrain to this label
    Named(String),
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.named().unwrap_or(ALL))
    }
}

impl Selection {
    /// Build from a user-supplied label; blank or `All` (any case) is unconstrained.
    pub fn from_label(label: impl AsRef<str>) -> Self {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }

    /// The pinned label, if any.
    #[must_use]
    pub fn named(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(label) => Some(label),
        }
    }

    /// Whether this is the unconstrained sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.named().unwrap_or(ALL))
    }
}

/// The active filter model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    name: String,
    city: Option<String>,
    region: Option<String>,
    course: String,
    stream: Selection,
    institution_type: Selection,
    min_rating: f64,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl FilterCriteria {
    /// The unfiltered state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a stream. Clears city and region.
    pub fn select_stream(&mut self, stream: impl AsRef<str>) {
        self.stream = Selection::from_label(stream);
        self.city = None;
        self.region = None;
    }

    /// Select a city. Clears region; a blank city clears the city.
    pub fn select_city(&mut self, city: &str) {
        self.city = non_blank(city);
        self.region = None;
    }

    /// Select a region. Clears city; a blank region clears the region.
    pub fn select_region(&mut self, region: &str) {
        self.region = non_blank(region);
        self.city = None;
    }

    /// Set the institution name fragment.
    pub fn set_name(&mut self, name: &str) {
        name.trim().clone_into(&mut self.name);
    }

    /// Set the program name fragment.
    pub fn set_course(&mut self, course: &str) {
        course.trim().clone_into(&mut self.course);
    }

    /// Set the institution type.
    pub fn set_type(&mut self, institution_type: impl AsRef<str>) {
        self.institution_type = Selection::from_label(institution_type);
    }

    /// Set the minimum rating. Non-finite or negative values mean no constraint.
    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.min_rating = if min_rating.is_finite() && min_rating > 0.0 {
            min_rating
        } else {
            0.0
        };
    }

    /// Return to the unfiltered state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Name fragment, empty when unset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected city.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Selected region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// City or region, whichever is set.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.city().or_else(|| self.region())
    }

    /// Program name fragment, empty when unset.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Stream selection.
    #[must_use]
    pub const fn stream(&self) -> &Selection {
        &self.stream
    }

    /// Institution type selection.
    #[must_use]
    pub const fn institution_type(&self) -> &Selection {
        &self.institution_type
    }

    /// Minimum rating, `0.0` when unconstrained.
    #[must_use]
    pub const fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Whether no filter is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}
