//! Ranking aggregation for institution detail views.
//!
//! Upstream ranking data is free text in whatever shape the scraper produced:
//! a single `#`-delimited string, an array of strings, or an object keyed
//! `"0"`, `"1"`, ... with string values. This module turns that into a table
//! of the best national rank per stream and year.
//!
//! ## Pipeline
//!
//! 1. [`RankingPayload::from_value`] classifies the shape once, at the
//!    ingestion boundary.
//! 2. [`normalize`] flattens any payload into `#`-prefixed line fragments.
//! 3. [`parse_line`] extracts rank, year and scope from one fragment.
//! 4. [`build_table`] keeps the lowest national rank per (stream, year),
//!    attaches the first state-level line as an annotation, and collects
//!    every year seen.
//!
//! Nothing here fails: fragments that do not yield both a rank and a year are
//! skipped, and empty cells render as [`NO_DATA`].
//!
//! ```rust
//! use campus_core::ranking::{build_table, CellView, RankingEntry, RankingPayload};
//! use serde_json::json;
//!
//! let entries = vec![RankingEntry::new(
//!     "Management",
//!     RankingPayload::from_value(&json!(["#5 India 2024", "#12 Uttar Pradesh 2024", "#3 India 2024"])),
//! )];
//! let table = build_table(&entries);
//!
//! match table.cell("Management", 2024) {
//!     CellView::Ranked { main, state } => {
//!         assert_eq!(main.rank.to_string(), "#3");
//!         assert_eq!(state, Some("#12 Uttar Pradesh 2024"));
//!     },
//!     other => panic!("unexpected cell {other:?}"),
//! }
//! ```

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use crate::region::INDIAN_STATES;

/// Marker that starts every ranking line in upstream text.
pub const RANK_MARKER: char = '#';

/// Rendered in place of an empty table cell.
pub const NO_DATA: &str = "-";

/// Stream label used when an entry does not name one.
pub const DEFAULT_STREAM: &str = "Overall";

#[allow(clippy::expect_used)]
static RANK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?\s*(\d+)(?:\s*-\s*(\d+))?").expect("rank regex is valid")
});

#[allow(clippy::expect_used)]
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])((?:19|20)[0-9]{2})(?:[^0-9]|$)").expect("year regex is valid")
});

/// Ranking data as it arrives from upstream, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingPayload {
    /// One delimited string.
    Text(String),
    /// An array; non-string members were dropped.
    List(Vec<String>),
    /// Values of a keyed object in key order; non-string values were dropped.
    Keyed(Vec<String>),
    /// Missing, null, or any other shape.
    Empty,
}

impl RankingPayload {
    /// Classify an arbitrary JSON value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(items) => Self::List(strings_of(items.iter())),
            Value::Object(map) => Self::Keyed(strings_of(ordered_values(map).into_iter())),
            _ => Self::Empty,
        }
    }
}

fn strings_of<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Object values with integer-like keys first in numeric order, then the rest.
///
/// Upstream objects are serialized arrays (`{"0": .., "1": .., "10": ..}`),
/// so `"10"` must come after `"2"`.
fn ordered_values(map: &Map<String, Value>) -> Vec<&Value> {
    let mut numeric: Vec<(u64, &Value)> = Vec::new();
    let mut named: Vec<&Value> = Vec::new();
    for (key, value) in map {
        match key.parse::<u64>() {
            Ok(index) => numeric.push((index, value)),
            Err(_) => named.push(value),
        }
    }
    numeric.sort_by_key(|(index, _)| *index);
    numeric.into_iter().map(|(_, v)| v).chain(named).collect()
}

/// Flatten a payload into trimmed, non-empty line fragments.
///
/// Every string is split in front of each [`RANK_MARKER`]; the marker stays
/// with the fragment it introduces.
#[must_use]
pub fn normalize(payload: &RankingPayload) -> Vec<String> {
    match payload {
        RankingPayload::Text(text) => split_fragments(text),
        RankingPayload::List(items) | RankingPayload::Keyed(items) => {
            items.iter().flat_map(|item| split_fragments(item)).collect()
        },
        RankingPayload::Empty => Vec::new(),
    }
}

fn split_fragments(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c == RANK_MARKER {
            push_fragment(&mut fragments, &current);
            current.clear();
        }
        current.push(c);
    }
    push_fragment(&mut fragments, &current);
    fragments
}

fn push_fragment(fragments: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() && trimmed != "#" {
        fragments.push(trimmed.to_string());
    }
}

/// Which table a ranking line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankScope {
    /// Mentions India.
    National,
    /// Mentions a state or union territory but not India.
    State,
    /// Mentions an international ranking.
    International,
    /// No recognisable scope keyword.
    Unscoped,
}

/// A parsed rank. Ranges keep both bounds but compare by the lower one.
///
/// Comparing `#3-5` as `3` matches how rankings were displayed upstream; it
/// is unclear whether the range's upper bound should ever matter, so the
/// leading bound is kept as the only comparable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rank {
    /// Comparable value (leading bound for ranges).
    pub value: u32,
    /// Upper bound when the line gave a range.
    pub upper: Option<u32>,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "#{}-{upper}", self.value),
            None => write!(f, "#{}", self.value),
        }
    }
}

/// One successfully parsed ranking fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingLine {
    /// The fragment as it appeared, trimmed.
    pub raw: String,
    /// Parsed rank.
    pub rank: Rank,
    /// Four-digit year.
    pub year: u16,
    /// Scope classification.
    pub scope: RankScope,
}

/// Parse one fragment. Returns `None` unless both a rank and a year are found.
#[must_use]
pub fn parse_line(line: &str) -> Option<RankingLine> {
    let trimmed = line.trim();
    let captures = RANK_RE.captures(trimmed)?;
    let whole = captures.get(0)?;
    let value = captures.get(1)?.as_str().parse::<u32>().ok()?;
    let upper = captures
        .get(2)
        .and_then(|upper| upper.as_str().parse::<u32>().ok());

    let rest = &trimmed[whole.end()..];
    let year = YEAR_RE
        .captures(rest)?
        .get(1)?
        .as_str()
        .parse::<u16>()
        .ok()?;

    Some(RankingLine {
        raw: trimmed.to_string(),
        rank: Rank { value, upper },
        year,
        scope: classify_scope(trimmed),
    })
}

fn classify_scope(line: &str) -> RankScope {
    let lower = line.to_lowercase();
    if lower.contains("international") {
        RankScope::International
    } else if lower.contains("india") {
        RankScope::National
    } else if INDIAN_STATES
        .iter()
        .any(|state| lower.contains(&state.to_lowercase()))
    {
        RankScope::State
    } else {
        RankScope::Unscoped
    }
}

/// Raw ranking data for one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// Stream label the rankings belong to.
    pub stream: String,
    /// Unparsed ranking text.
    pub payload: RankingPayload,
}

impl RankingEntry {
    /// Build an entry from parts.
    pub fn new(stream: impl Into<String>, payload: RankingPayload) -> Self {
        Self {
            stream: stream.into(),
            payload,
        }
    }

    /// Read one `{ "stream": .., "ranking": .. }` object.
    ///
    /// A missing or blank stream becomes [`DEFAULT_STREAM`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let stream = value
            .get("stream")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STREAM);
        let payload = value
            .get("ranking")
            .map_or(RankingPayload::Empty, RankingPayload::from_value);
        Self::new(stream, payload)
    }
}

/// Extract ranking entries from an institution's raw upstream payload.
///
/// Reads `ranking_data`, which upstream serializes either as an array of
/// entries or as an object keyed by index.
#[must_use]
pub fn entries_from_raw(raw: &Value) -> Vec<RankingEntry> {
    match raw.get("ranking_data") {
        Some(Value::Array(items)) => items.iter().map(RankingEntry::from_value).collect(),
        Some(Value::Object(map)) => ordered_values(map)
            .into_iter()
            .map(RankingEntry::from_value)
            .collect(),
        _ => Vec::new(),
    }
}

/// One (stream, year) cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankingCell {
    /// Best national line.
    pub main: Option<RankingLine>,
    /// First state-level line seen for this cell.
    pub state: Option<String>,
}

/// Rankings for one stream, keyed by year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRow {
    /// Stream label.
    pub stream: String,
    /// Cells by year.
    pub cells: BTreeMap<u16, RankingCell>,
}

/// Borrowed view of a cell for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView<'a> {
    /// Nothing usable for this stream and year.
    Unavailable,
    /// Only a state-level annotation exists.
    StateOnly(&'a str),
    /// A national rank, with an optional state annotation.
    Ranked {
        /// Best national line.
        main: &'a RankingLine,
        /// State-level annotation.
        state: Option<&'a str>,
    },
}

impl fmt::Display for CellView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str(NO_DATA),
            Self::StateOnly(state) => write!(f, "{NO_DATA} ({state})"),
            Self::Ranked { main, state: None } => f.write_str(&main.raw),
            Self::Ranked {
                main,
                state: Some(state),
            } => write!(f, "{} ({state})", main.raw),
        }
    }
}

/// The aggregated ranking table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankingTable {
    /// Rows in first-seen stream order.
    pub rows: Vec<RankingRow>,
    /// Every year of a parsed line, most recent first.
    pub years: Vec<u16>,
}

impl RankingTable {
    /// Whether no row has any cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.cells.is_empty())
    }

    /// Look up a cell for rendering.
    #[must_use]
    pub fn cell(&self, stream: &str, year: u16) -> CellView<'_> {
        let Some(cell) = self
            .rows
            .iter()
            .find(|row| row.stream == stream)
            .and_then(|row| row.cells.get(&year))
        else {
            return CellView::Unavailable;
        };

        match (&cell.main, cell.state.as_deref()) {
            (Some(main), state) => CellView::Ranked { main, state },
            (None, Some(state)) => CellView::StateOnly(state),
            (None, None) => CellView::Unavailable,
        }
    }

    fn cell_mut(&mut self, stream: &str, year: u16) -> &mut RankingCell {
        let index = if let Some(index) = self.rows.iter().position(|row| row.stream == stream) {
            index
        } else {
            self.rows.push(RankingRow {
                stream: stream.to_string(),
                cells: BTreeMap::new(),
            });
            self.rows.len() - 1
        };
        self.rows[index].cells.entry(year).or_default()
    }
}

/// Aggregate ranking entries into the best-rank table.
#[must_use]
pub fn build_table(entries: &[RankingEntry]) -> RankingTable {
    let mut table = RankingTable::default();
    let mut years = BTreeSet::new();

    for entry in entries {
        for fragment in normalize(&entry.payload) {
            let Some(line) = parse_line(&fragment) else {
                tracing::debug!(stream = %entry.stream, %fragment, "skipping unparseable ranking fragment");
                continue;
            };
            years.insert(line.year);

            match line.scope {
                RankScope::National => {
                    let cell = table.cell_mut(&entry.stream, line.year);
                    let better = cell
                        .main
                        .as_ref()
                        .is_none_or(|current| line.rank.value < current.rank.value);
                    if better {
                        cell.main = Some(line);
                    }
                },
                RankScope::State => {
                    let cell = table.cell_mut(&entry.stream, line.year);
                    if cell.state.is_none() {
                        cell.state = Some(line.raw);
                    }
                },
                RankScope::International | RankScope::Unscoped => {},
            }
        }
    }

    table.years = years.into_iter().rev().collect();
    table
}
