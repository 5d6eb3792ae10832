//! Stream classification for free-text program names.
//!
//! Two independent lookups live here:
//!
//! - [`classify`] maps a program name such as `"MBA in Business Analytics"` to
//!   one canonical [`Stream`] using an ordered rule table.
//! - [`allowed_aliases`] / [`resolve_aliases`] map a stream filter value onto
//!   the raw labels institutions declare for that stream (`"MBA"`, `"PGDM"`,
//!   `"Management"`), used by the listing filter.
//!
//! Both tables are ordered slices. The order is a priority list: a name such
//! as `"Computer Science Management"` resolves to `Management` because the
//! management rule is listed before engineering.
//!
//! ```rust
//! use campus_core::classify::{classify, Stream};
//!
//! assert_eq!(classify("Ph.D in Management"), Stream::Doctoral);
//! assert_eq!(classify("Computer Science Management"), Stream::Management);
//! assert_eq!(classify("Diploma in Culinary"), Stream::General);
//! ```

use serde::Serialize;
use std::fmt;

use crate::slug::to_slug;

/// Canonical academic stream a program name classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stream {
    /// Ph.D and other doctoral programs
    Doctoral,
    /// MBA, PGDM and executive programs
    Management,
    /// Engineering and technology, including computing programs
    Engineering,
    /// MBBS and healthcare
    Medical,
    /// Commerce, accounting and finance
    Commerce,
    /// Arts, humanities and social sciences
    Arts,
    /// Fallback when no rule matches
    General,
}

impl Stream {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Doctoral => "Doctoral",
            Self::Management => "Management",
            Self::Engineering => "Engineering",
            Self::Medical => "Medical",
            Self::Commerce => "Commerce",
            Self::Arts => "Arts",
            Self::General => "General",
        }
    }

    /// Segment used in `/courses/{categorySlug}/{courseSlug}`.
    #[must_use]
    pub fn category_slug(self) -> String {
        to_slug(self.label())
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered classification rules. First match wins.
const STREAM_RULES: &[(Stream, &[&str])] = &[
    (
        Stream::Doctoral,
        &["ph.d", "phd", "post doctoral", "doctoral"],
    ),
    (
        Stream::Management,
        &[
            "mba",
            "pgdm",
            "management",
            "leadership",
            "strategy",
            "executive",
        ],
    ),
    (
        Stream::Engineering,
        &[
            "b.tech",
            "btech",
            "engineering",
            "technology",
            "data science",
            "artificial intelligence",
            "machine learning",
            "computer",
            "m.sc",
            "msc",
        ],
    ),
    (Stream::Medical, &["mbbs", "medical", "healthcare"]),
    (
        Stream::Commerce,
        &["b.com", "commerce", "account", "finance"],
    ),
    (Stream::Arts, &["arts", "humanities", "social"]),
];

/// Classify a free-text program name into a canonical stream.
///
/// Case-insensitive substring tests against [`STREAM_RULES`] in order;
/// returns [`Stream::General`] when nothing matches.
#[must_use]
pub fn classify(program_name: &str) -> Stream {
    let name = program_name.to_lowercase();
    STREAM_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(Stream::General, |(stream, _)| *stream)
}

/// A canonical stream key with the raw labels treated as equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFamily {
    /// Canonical key, also the stream segment in listing URLs (`mba`).
    pub key: &'static str,
    /// Label restored when a listing URL is parsed back (`Management`).
    pub display: &'static str,
    /// Raw labels institutions use for this stream.
    pub aliases: &'static [&'static str],
}

/// Stream families in URL-mapping priority order.
pub const STREAM_FAMILIES: &[StreamFamily] = &[
    StreamFamily {
        key: "btech",
        display: "Engineering",
        aliases: &["B.Tech", "BTech", "BE", "B.E", "Engineering"],
    },
    StreamFamily {
        key: "mba",
        display: "Management",
        aliases: &["MBA", "PGDM", "Management"],
    },
    StreamFamily {
        key: "mbbs",
        display: "Medical",
        aliases: &["MBBS", "Medical"],
    },
    StreamFamily {
        key: "bca",
        display: "Computer Applications",
        aliases: &["BCA", "Computer Applications"],
    },
    StreamFamily {
        key: "bcom",
        display: "BCom",
        aliases: &["bcom"],
    },
    StreamFamily {
        key: "bsc",
        display: "BSc",
        aliases: &["bsc"],
    },
    StreamFamily {
        key: "ba",
        display: "BA",
        aliases: &["ba"],
    },
    StreamFamily {
        key: "bba",
        display: "BBA",
        aliases: &["bba"],
    },
];

/// Letters-only lowercase form used for stream comparisons.
///
/// `"B.Tech"` and `"btech"` both become `"btech"`.
#[must_use]
pub fn letters_only(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Look up a family by its canonical key (`"mba"`).
#[must_use]
pub fn allowed_aliases(key: &str) -> Option<&'static [&'static str]> {
    let key = letters_only(key);
    STREAM_FAMILIES
        .iter()
        .find(|family| family.key == key)
        .map(|family| family.aliases)
}

/// Find the family a stream label belongs to, by key or by any alias.
#[must_use]
pub fn family_for(label: &str) -> Option<&'static StreamFamily> {
    let normalized = letters_only(label);
    if normalized.is_empty() {
        return None;
    }
    STREAM_FAMILIES.iter().find(|family| {
        family.key == normalized
            || family
                .aliases
                .iter()
                .any(|alias| letters_only(alias) == normalized)
    })
}

/// Raw labels a stream filter value should match.
///
/// Known families expand to their alias list; anything else matches itself.
#[must_use]
pub fn resolve_aliases(filter_value: &str) -> Vec<String> {
    family_for(filter_value).map_or_else(
        || vec![filter_value.to_string()],
        |family| family.aliases.iter().map(|a| (*a).to_string()).collect(),
    )
}
