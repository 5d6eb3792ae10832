//! Filter option lists derived from the loaded collection.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::criteria::ALL;
use crate::model::Institution;
use crate::region::is_state;

/// Distinct values offered by the listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Declared stream labels, sorted.
    pub streams: Vec<String>,
    /// Location parts that are known states, sorted.
    pub states: Vec<String>,
    /// Every other location part, sorted.
    pub cities: Vec<String>,
    /// `All` followed by institution types in first-seen order.
    pub institution_types: Vec<String>,
}

/// Collect facets from `institutions`.
///
/// Locations are split on commas and each trimmed part is classified on its
/// own, so `"Sector 62, Noida, Uttar Pradesh"` contributes two cities and a
/// state.
#[must_use]
pub fn extract_facets(institutions: &[Institution]) -> Facets {
    let mut streams = BTreeSet::new();
    let mut states = BTreeSet::new();
    let mut cities = BTreeSet::new();
    let mut institution_types = vec![ALL.to_string()];

    for institution in institutions {
        streams.extend(institution.stream.iter().cloned());

        let kind = institution.institution_type.trim();
        if !kind.is_empty() && !institution_types.iter().any(|t| t == kind) {
            institution_types.push(kind.to_string());
        }

        for part in institution.location.split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            if is_state(part) {
                states.insert(part.to_string());
            } else {
                cities.insert(part.to_string());
            }
        }
    }

    Facets {
        streams: streams.into_iter().collect(),
        states: states.into_iter().collect(),
        cities: cities.into_iter().collect(),
        institution_types,
    }
}
