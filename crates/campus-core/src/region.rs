//! Region groups and administrative regions used by location filters.
//!
//! A region group clusters several city aliases under one filterable name
//! (the capital region spans Delhi, Noida, Gurgaon, ...). Location filters
//! also accept a state or union territory name, which is matched against the
//! institution's location string directly.
//!
//! Matching is deliberately loose: both sides are reduced with
//! [`normalize_key`] and compared by substring containment, so
//! `"Sector 62, Noida, Uttar Pradesh"` belongs to `Delhi NCR`.
//!
//! ```rust
//! use campus_core::region::RegionMap;
//!
//! let regions = RegionMap::default();
//! assert_eq!(regions.resolve_region("Greater Noida"), Some("Delhi NCR"));
//! assert!(regions.matches_region("Sector 62, Noida, Uttar Pradesh", "Delhi NCR"));
//! assert!(regions.matches_region("Lucknow, Uttar Pradesh", "Uttar Pradesh"));
//! ```

use serde::{Deserialize, Serialize};

use crate::slug::normalize_key;

/// Named cluster of city aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionGroup {
    /// Display name of the region (`Delhi NCR`).
    pub name: String,
    /// City aliases in lookup order.
    pub cities: Vec<String>,
}

impl RegionGroup {
    /// Create a group from static parts.
    pub fn new(name: impl Into<String>, cities: &[&str]) -> Self {
        Self {
            name: name.into(),
            cities: cities.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// States and union territories recognised as administrative regions.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Jammu and Kashmir",
    "Chandigarh",
    "Puducherry",
    "Ladakh",
];

/// Case-insensitive lookup of a state name, returning its canonical spelling.
#[must_use]
pub fn find_state(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    INDIAN_STATES
        .iter()
        .copied()
        .find(|state| state.eq_ignore_ascii_case(wanted))
}

/// Whether `name` is exactly a known state (case-sensitive, trimmed).
#[must_use]
pub fn is_state(name: &str) -> bool {
    INDIAN_STATES.contains(&name.trim())
}

/// Immutable lookup of region groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    groups: Vec<RegionGroup>,
}

impl Default for RegionMap {
    fn default() -> Self {
        Self {
            groups: vec![RegionGroup::new(
                "Delhi NCR",
                &[
                    "Delhi",
                    "New Delhi",
                    "Noida",
                    "Greater Noida",
                    "Alpha Greater Noida",
                    "Gurgaon",
                    "Faridabad",
                    "Ghaziabad",
                    "Dwarka",
                    "Rohini",
                ],
            )],
        }
    }
}

impl RegionMap {
    /// The built-in groups followed by `extra`.
    ///
    /// Extra groups whose name duplicates an earlier group are ignored so
    /// lookups stay first-match.
    #[must_use]
    pub fn with_groups(extra: impl IntoIterator<Item = RegionGroup>) -> Self {
        let mut map = Self::default();
        for group in extra {
            if map.group(&group.name).is_some() {
                tracing::warn!(region = %group.name, "ignoring duplicate region group");
                continue;
            }
            map.groups.push(group);
        }
        map
    }

    /// All groups in lookup order.
    #[must_use]
    pub fn groups(&self) -> &[RegionGroup] {
        &self.groups
    }

    /// Find a group by name, ignoring case.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&RegionGroup> {
        let wanted = name.trim();
        self.groups
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(wanted))
    }

    /// The first region whose alias list contains `city` (normalized).
    #[must_use]
    pub fn resolve_region(&self, city: &str) -> Option<&str> {
        let key = normalize_key(city);
        if key.is_empty() {
            return None;
        }
        self.groups
            .iter()
            .find(|group| group.cities.iter().any(|alias| normalize_key(alias) == key))
            .map(|group| group.name.as_str())
    }

    /// Whether a location string belongs to `region`.
    ///
    /// Region groups match when any alias is contained in the normalized
    /// location; any other region name (a state) matches by containment of
    /// the name itself. An empty region name matches everything.
    #[must_use]
    pub fn matches_region(&self, location: &str, region: &str) -> bool {
        let region_key = normalize_key(region);
        if region_key.is_empty() {
            return true;
        }
        let location_key = normalize_key(location);

        if let Some(group) = self.group(region) {
            return group.cities.iter().any(|alias| {
                let alias_key = normalize_key(alias);
                !alias_key.is_empty() && location_key.contains(&alias_key)
            });
        }

        location_key.contains(&region_key)
    }

    /// Resolve a de-slugged location to a recognised region name.
    ///
    /// Region groups take precedence over states. Returns `None` when the
    /// location should be treated as a city.
    #[must_use]
    pub fn recognise(&self, location: &str) -> Option<String> {
        if let Some(group) = self.group(location) {
            return Some(group.name.clone());
        }
        find_state(location).map(str::to_string)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_region_normalizes_input() {
        let regions = RegionMap::default();
        assert_eq!(regions.resolve_region("noida"), Some("Delhi NCR"));
        assert_eq!(regions.resolve_region("New-Delhi."), Some("Delhi NCR"));
        assert_eq!(regions.resolve_region("GURGAON"), Some("Delhi NCR"));
        assert_eq!(regions.resolve_region("Pune"), None);
        assert_eq!(regions.resolve_region(""), None);
    }

    #[test]
    fn test_matches_group_by_substring() {
        let regions = RegionMap::default();
        assert!(regions.matches_region("Knowledge Park III, Greater Noida", "Delhi NCR"));
        assert!(regions.matches_region("Dwarka Sector 9, New Delhi", "delhi ncr"));
        assert!(!regions.matches_region("Pune, Maharashtra", "Delhi NCR"));
    }

    #[test]
    fn test_matches_state_by_name() {
        let regions = RegionMap::default();
        assert!(regions.matches_region("Lucknow, Uttar Pradesh", "Uttar Pradesh"));
        assert!(!regions.matches_region("Patna, Bihar", "Uttar Pradesh"));
    }

    #[test]
    fn test_empty_region_matches_everything() {
        let regions = RegionMap::default();
        assert!(regions.matches_region("anywhere", ""));
    }

    #[test]
    fn test_with_groups_appends_and_skips_duplicates() {
        let regions = RegionMap::with_groups(vec![
            RegionGroup::new("Mumbai Metropolitan Region", &["Mumbai", "Thane", "Navi Mumbai"]),
            RegionGroup::new("delhi ncr", &["Meerut"]),
        ]);
        assert_eq!(regions.groups().len(), 2);
        assert_eq!(
            regions.resolve_region("Thane"),
            Some("Mumbai Metropolitan Region")
        );
        assert_eq!(regions.resolve_region("Meerut"), None);
    }

    #[test]
    fn test_recognise() {
        let regions = RegionMap::default();
        assert_eq!(regions.recognise("delhi ncr").as_deref(), Some("Delhi NCR"));
        assert_eq!(regions.recognise("uttar pradesh").as_deref(), Some("Uttar Pradesh"));
        assert_eq!(regions.recognise("pune"), None);
    }

    #[test]
    fn test_state_lookup() {
        assert_eq!(find_state("tamil nadu"), Some("Tamil Nadu"));
        assert!(is_state("Kerala"));
        assert!(!is_state("kerala"));
        assert!(!is_state("Pune"));
    }
}
