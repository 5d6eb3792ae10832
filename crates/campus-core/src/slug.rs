//! Slug codec for course, institution, stream and location names.
//!
//! Slugs are lossy: two display names can collapse onto the same slug, and
//! there is no inverse. Consumers that need to get back to a record carry the
//! identifier next to the slug (see [`id_slug`] / [`split_id_slug`]).
//!
//! ```rust
//! use campus_core::slug::{to_slug, to_program_slug, display_case};
//!
//! assert_eq!(to_slug("IIM Lucknow (Main Campus)"), "iim-lucknow");
//! assert_eq!(to_program_slug("PGDM [PGP-FABM] Finance & Banking"), "pgdm-finance-and-banking");
//! assert_eq!(display_case("uttar-pradesh"), "Uttar Pradesh");
//! ```

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static PARENTHESIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthesized regex is valid"));

#[allow(clippy::expect_used)]
static BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("bracketed regex is valid"));

/// Derive a URL slug from a display name.
///
/// Lowercases, drops parenthesized segments, keeps only `[a-z0-9]`, and joins
/// the remaining runs with single hyphens. The result never starts or ends
/// with a hyphen and `to_slug(to_slug(x)) == to_slug(x)`.
#[must_use]
pub fn to_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = PARENTHESIZED_RE.replace_all(&lowered, " ");
    hyphenate(&stripped)
}

/// Derive a slug for a program name.
///
/// Program names often carry internal codes in brackets (`[PGP-FABM]`) and
/// ampersands; both are handled before the regular [`to_slug`] pipeline.
#[must_use]
pub fn to_program_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_codes = BRACKETED_RE.replace_all(&lowered, " ");
    let expanded = without_codes.replace('&', " and ");
    to_slug(&expanded)
}

/// Keep `[a-z0-9]`, turn whitespace and hyphen runs into one hyphen, drop
/// everything else, and trim hyphens at both ends.
fn hyphenate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !result.is_empty() {
                result.push('-');
            }
            pending_hyphen = false;
            result.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    result
}

/// Turn a slug back into a display-cased label.
///
/// Hyphens become spaces and every word gets an uppercase first letter. This
/// is a best-effort rendering, not an inverse of [`to_slug`].
#[must_use]
pub fn display_case(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comparison key: lowercase with every non-alphanumeric character removed.
///
/// `"New Delhi, Delhi"` and `"newdelhi delhi"` share the key `"newdelhidelhi"`.
#[must_use]
pub fn normalize_key(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Build the `{id}-{slug}` composite used by detail routes.
#[must_use]
pub fn id_slug(id: &str, name: &str) -> String {
    let slug = to_slug(name);
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{id}-{slug}")
    }
}

/// Extract the authoritative id from an `{id}-{slug}` segment.
///
/// Everything after the first hyphen is decorative and ignored.
///
/// ```rust
/// use campus_core::slug::split_id_slug;
///
/// assert_eq!(split_id_slug("25946-iiml-indian-institute-of-management-lucknow"), Some("25946"));
/// assert_eq!(split_id_slug("-orphan"), None);
/// ```
#[must_use]
pub fn split_id_slug(segment: &str) -> Option<&str> {
    let id = segment.split('-').next()?.trim();
    if id.is_empty() { None } else { Some(id) }
}

/// Whether `segment` is already a well-formed slug.
#[must_use]
pub fn is_slug(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('-')
        && !segment.ends_with('-')
        && !segment.contains("--")
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
