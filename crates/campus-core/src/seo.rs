//! Listing page copy: document title, meta description and hero heading.
//!
//! ```rust
//! use campus_core::criteria::FilterCriteria;
//! use campus_core::seo::{SiteCopy, heading};
//!
//! let mut criteria = FilterCriteria::new();
//! criteria.select_stream("MBA");
//! criteria.select_city("Pune");
//!
//! let site = SiteCopy::default();
//! assert_eq!(
//!     site.title(&criteria),
//!     "MBA Colleges in Pune 2026 – Fees, Ranking, Admission | StudyCups"
//! );
//! assert_eq!(heading(&criteria), "Top MBA Colleges in Pune");
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::FilterCriteria;

/// Site-wide values interpolated into page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteCopy {
    /// Brand appended to titles.
    pub brand: String,
    /// Admission year quoted in titles and descriptions.
    pub year: u16,
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self {
            brand: "StudyCups".to_string(),
            year: 2026,
        }
    }
}

impl SiteCopy {
    /// Document title.
    #[must_use]
    pub fn title(&self, criteria: &FilterCriteria) -> String {
        let Self { brand, year } = self;
        match (criteria.stream().named(), criteria.location()) {
            (Some(stream), Some(location)) => {
                format!("{stream} Colleges in {location} {year} – Fees, Ranking, Admission | {brand}")
            },
            (Some(stream), None) => {
                format!("Top {stream} Colleges in India {year} – Fees, Ranking, Admission | {brand}")
            },
            (None, _) => {
                format!("Top Colleges in India {year} – Rankings, Fees, Admissions | {brand}")
            },
        }
    }

    /// Meta description.
    #[must_use]
    pub fn description(&self, criteria: &FilterCriteria) -> String {
        let year = self.year;
        match (criteria.stream().named(), criteria.location()) {
            (Some(stream), Some(location)) => format!(
                "Explore top {stream} colleges in {location}. Compare fees, rankings, placements, cutoffs and admission process for {year}."
            ),
            (None, Some(location)) => format!(
                "Explore top colleges in {location}. Compare fees, rankings, placements, cutoffs and admission process for {year}."
            ),
            (_, None) => "Compare top colleges in India by fees, rankings, placements, cutoffs and admission process.".to_string(),
        }
    }
}

/// Hero heading for the listing page.
#[must_use]
pub fn heading(criteria: &FilterCriteria) -> String {
    match (criteria.stream().named(), criteria.location()) {
        (Some(stream), Some(location)) => format!("Top {stream} Colleges in {location}"),
        (Some(stream), None) => format!("Top {stream} Colleges"),
        (None, Some(location)) => format!("Top Colleges in {location}"),
        (None, None) => "Top Colleges in India".to_string(),
    }
}
