//! Institution and program records, decoded leniently from upstream JSON.
//!
//! The data service gives no shape guarantees: ids are numbers or strings,
//! `stream` is a string or an array, ratings are numbers, numeric strings, or
//! missing. Every field here is optional on the wire and decodes to a usable
//! default instead of failing the whole collection.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::ranking::{RankingEntry, entries_from_raw};
use crate::{Error, Result};

/// One program (course) offered by an institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Free-text program name, not pre-classified.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Fee text as published.
    #[serde(default, deserialize_with = "lenient_text")]
    pub fees: String,
    /// Eligibility text as published.
    #[serde(default, deserialize_with = "lenient_text")]
    pub eligibility: String,
    /// Nested specialisations.
    #[serde(
        default,
        rename = "sub_courses",
        alias = "subPrograms",
        deserialize_with = "lenient_programs"
    )]
    pub sub_programs: Vec<Program>,
}

/// One institution as listed by the portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    /// Authoritative identifier.
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// `"City, State"` or `"City"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    /// Declared stream labels.
    #[serde(default, deserialize_with = "lenient_streams")]
    pub stream: Vec<String>,
    /// Government, private, ...
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub institution_type: String,
    /// Rating when upstream gave a usable number.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    /// Programs in listing order.
    #[serde(
        default,
        rename = "courses",
        alias = "programs",
        deserialize_with = "lenient_programs"
    )]
    pub programs: Vec<Program>,
    /// Untouched upstream payload.
    #[serde(default, rename = "rawScraped", skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl Institution {
    /// Programs to use for matching and the course catalog.
    ///
    /// Falls back to `rawScraped.courses` when the top-level list is empty,
    /// which is where the scraper stores them for most records.
    #[must_use]
    pub fn effective_programs(&self) -> Vec<Program> {
        if !self.programs.is_empty() {
            return self.programs.clone();
        }
        self.raw
            .as_ref()
            .and_then(|raw| raw.get("courses"))
            .map(programs_from_value)
            .unwrap_or_default()
    }

    /// Ranking entries from the raw payload; empty when there is none.
    #[must_use]
    pub fn ranking_entries(&self) -> Vec<RankingEntry> {
        self.raw.as_ref().map(entries_from_raw).unwrap_or_default()
    }

    /// `{id}-{slug}` segment for the detail route.
    #[must_use]
    pub fn id_slug(&self) -> String {
        crate::slug::id_slug(&self.id, &self.name)
    }
}

/// The loaded institution collection. Read-only after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    /// Wrap an existing collection.
    #[must_use]
    pub const fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions }
    }

    /// Parse a catalog document.
    ///
    /// Accepts a bare array or a `{ "data": [...] }` envelope. Array members
    /// that are not objects are skipped.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let items = match document {
            Value::Array(items) => items,
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(Error::Parse(
                        "catalog object has no `data` array".to_string(),
                    ));
                },
            },
            _ => {
                return Err(Error::Parse(
                    "catalog must be an array or a `data` envelope".to_string(),
                ));
            },
        };

        let total = items.len();
        let institutions: Vec<Institution> = items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(institution) => Some(institution),
                Err(e) => {
                    tracing::warn!("skipping unreadable institution record: {e}");
                    None
                },
            })
            .collect();

        tracing::debug!(total, loaded = institutions.len(), "catalog parsed");
        Ok(Self { institutions })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// All institutions in upstream order.
    #[must_use]
    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    /// Look up an institution by id.
    pub fn get(&self, id: &str) -> Result<&Institution> {
        self.institutions
            .iter()
            .find(|institution| institution.id == id)
            .ok_or_else(|| Error::NotFound(format!("institution {id}")))
    }

    /// Number of institutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn programs_from_value(value: &Value) -> Vec<Program> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value).unwrap_or_default())
}

fn lenient_streams<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let streams = match value {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(streams
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn lenient_rating<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}

fn lenient_programs<'de, D>(deserializer: D) -> std::result::Result<Vec<Program>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(programs_from_value(&value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_lenient_fields() {
        let institution: Institution = serde_json::from_value(json!({
            "id": 25946,
            "name": "IIM Lucknow",
            "location": "Lucknow, Uttar Pradesh",
            "stream": "MBA",
            "type": "Government",
            "rating": "4.6",
            "courses": [{"name": "PGP", "fees": 2400000}, "junk"]
        }))
        .unwrap();

        assert_eq!(institution.id, "25946");
        assert_eq!(institution.stream, vec!["MBA"]);
        assert_eq!(institution.rating, Some(4.6));
        assert_eq!(institution.programs.len(), 1);
        assert_eq!(institution.programs[0].fees, "2400000");
        assert_eq!(institution.id_slug(), "25946-iim-lucknow");
    }

    #[test]
    fn test_missing_and_odd_fields_default() {
        let institution: Institution = serde_json::from_value(json!({
            "stream": ["B.Tech", 4, " ", "BCA"],
            "rating": "n/a",
            "type": null
        }))
        .unwrap();

        assert!(institution.id.is_empty());
        assert_eq!(institution.stream, vec!["B.Tech", "BCA"]);
        assert_eq!(institution.rating, None);
        assert!(institution.institution_type.is_empty());
        assert!(institution.programs.is_empty());
    }

    #[test]
    fn test_effective_programs_falls_back_to_raw() {
        let institution: Institution = serde_json::from_value(json!({
            "id": 1,
            "rawScraped": {"courses": [{"name": "MBA", "sub_courses": [{"name": "MBA Finance"}]}]}
        }))
        .unwrap();

        let programs = institution.effective_programs();
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].sub_programs[0].name, "MBA Finance");
        assert!(institution.ranking_entries().is_empty());
    }

    #[test]
    fn test_ranking_entries_from_raw() {
        let institution: Institution = serde_json::from_value(json!({
            "id": 2,
            "rawScraped": {"ranking_data": [{"stream": "MBA", "ranking": "#3 India 2024"}]}
        }))
        .unwrap();
        let entries = institution.ranking_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].stream, "MBA");
    }

    #[test]
    fn test_catalog_envelope_and_array() {
        let bare = Catalog::from_json_str(r#"[{"id": 1}, 5, {"id": "2"}]"#).unwrap();
        assert_eq!(bare.len(), 2);

        let wrapped = Catalog::from_json_str(r#"{"data": [{"id": 3, "name": "X"}]}"#).unwrap();
        assert_eq!(wrapped.get("3").unwrap().name, "X");
        assert!(matches!(wrapped.get("4"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_catalog_rejects_other_documents() {
        assert!(matches!(
            Catalog::from_json_str(r#"{"items": []}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(Catalog::from_json_str("42"), Err(Error::Parse(_))));
        assert!(matches!(
            Catalog::from_json_str("{oops"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_catalog_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 9, "name": "Test"}}]"#).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.institutions()[0].name, "Test");

        assert!(matches!(
            Catalog::load(Path::new("/definitely/not/here.json")),
            Err(Error::Io(_))
        ));
    }
}
