//! Bidirectional sync between listing criteria and the current path.
//!
//! On load, the path initializes the criteria exactly once. After that every
//! criteria change produces a canonical path and, when it differs from the
//! last path this synchronizer wrote, a single `replace` on the navigator.
//! The write cache is what keeps a path written by us from being treated as
//! a fresh change.

use serde::Serialize;
use tracing::debug;

use crate::criteria::FilterCriteria;
use crate::route::{Route, listing_path};
use crate::{Error, Result};

/// Where path writes go.
pub trait Navigator {
    /// Replace the current path without adding a history entry.
    fn replace(&mut self, path: &str);
}

/// Navigator that records every write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    writes: Vec<String>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, path: &str) {
        self.writes.push(path.to_string());
    }
}

/// Synchronizer lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Waiting for the initial path
    #[default]
    Uninitialized,
    /// Criteria seeded; changes now write paths
    Initialized,
}

/// The last path this synchronizer wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCache {
    last: Option<String>,
}

impl PathCache {
    /// Last written path.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Whether `path` is the last written path.
    #[must_use]
    pub fn is_current(&self, path: &str) -> bool {
        self.last.as_deref() == Some(path)
    }

    /// Record a written path.
    pub fn record(&mut self, path: impl Into<String>) {
        self.last = Some(path.into());
    }

    /// Forget the last written path.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// One user-driven criteria change.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    /// Pick a stream (`All` to unset)
    Stream(String),
    /// Pick a city (blank to unset)
    City(String),
    /// Pick a region (blank to unset)
    Region(String),
    /// Institution name fragment
    Name(String),
    /// Program name fragment
    Course(String),
    /// Institution type (`All` to unset)
    Type(String),
    /// Minimum rating (`0` to unset)
    MinRating(f64),
    /// Drop every filter
    Clear,
}

impl FilterChange {
    fn apply_to(&self, criteria: &mut FilterCriteria) {
        match self {
            Self::Stream(stream) => criteria.select_stream(stream),
            Self::City(city) => criteria.select_city(city),
            Self::Region(region) => criteria.select_region(region),
            Self::Name(name) => criteria.set_name(name),
            Self::Course(course) => criteria.set_course(course),
            Self::Type(kind) => criteria.set_type(kind),
            Self::MinRating(rating) => criteria.set_min_rating(*rating),
            Self::Clear => criteria.clear(),
        }
    }
}

/// Keeps criteria and path consistent without write loops.
#[derive(Debug)]
pub struct FilterSync<N: Navigator> {
    criteria: FilterCriteria,
    lifecycle: Lifecycle,
    cache: PathCache,
    navigator: N,
}

impl<N: Navigator> FilterSync<N> {
    /// Create an uninitialized synchronizer.
    pub fn new(navigator: N) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            lifecycle: Lifecycle::Uninitialized,
            cache: PathCache::default(),
            navigator,
        }
    }

    /// Seed criteria from the route the page was loaded with.
    ///
    /// The resulting canonical path is recorded as already written, so the
    /// first change that lands back on it does not navigate.
    ///
    /// # Errors
    ///
    /// [`Error::Lifecycle`] when already initialized, [`Error::InvalidRoute`]
    /// when the route is not a listing.
    pub fn initialize(&mut self, route: &Route) -> Result<&FilterCriteria> {
        if self.lifecycle == Lifecycle::Initialized {
            return Err(Error::Lifecycle(
                "filter sync is already initialized".to_string(),
            ));
        }
        let Route::Listing { criteria } = route else {
            return Err(Error::InvalidRoute(format!(
                "{} route cannot initialize listing filters",
                route.kind()
            )));
        };

        self.criteria = criteria.clone();
        self.cache.record(listing_path(&self.criteria));
        self.lifecycle = Lifecycle::Initialized;
        debug!(path = ?self.cache.last(), "filter sync initialized");
        Ok(&self.criteria)
    }

    /// Apply a change and write the canonical path if it moved.
    ///
    /// Returns the written path, or `None` when the path was unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::Lifecycle`] before [`initialize`](Self::initialize).
    pub fn apply(&mut self, change: &FilterChange) -> Result<Option<String>> {
        if self.lifecycle == Lifecycle::Uninitialized {
            return Err(Error::Lifecycle(
                "filter change before initialization".to_string(),
            ));
        }

        change.apply_to(&mut self.criteria);
        let path = listing_path(&self.criteria);
        if self.cache.is_current(&path) {
            debug!(%path, "path unchanged, skipping navigation");
            return Ok(None);
        }

        self.navigator.replace(&path);
        self.cache.record(path.clone());
        Ok(Some(path))
    }

    /// Back to the uninitialized state with empty criteria and cache.
    pub fn reset(&mut self) {
        self.criteria.clear();
        self.cache.clear();
        self.lifecycle = Lifecycle::Uninitialized;
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Last path written or seeded.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.cache.last()
    }

    /// The navigator.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::region::RegionMap;

    fn initialized(path: &str) -> FilterSync<RecordingNavigator> {
        let mut sync = FilterSync::new(RecordingNavigator::new());
        sync.initialize(&Route::parse(path, &RegionMap::default()))
            .unwrap();
        sync
    }

    #[test]
    fn test_initialize_does_not_navigate() {
        let sync = initialized("/mba/top-colleges-in-pune");
        assert_eq!(sync.lifecycle(), Lifecycle::Initialized);
        assert_eq!(sync.criteria().city(), Some("Pune"));
        assert_eq!(sync.current_path(), Some("/mba/top-colleges-in-pune"));
        assert!(sync.navigator().writes().is_empty());
    }

    #[test]
    fn test_initialize_only_once() {
        let mut sync = initialized("/colleges");
        let again = sync.initialize(&Route::parse("/mba/top-colleges", &RegionMap::default()));
        assert!(matches!(again, Err(Error::Lifecycle(_))));
        assert!(sync.criteria().is_unfiltered());
    }

    #[test]
    fn test_initialize_rejects_non_listing() {
        let mut sync = FilterSync::new(RecordingNavigator::new());
        let result = sync.initialize(&Route::parse("/university/1-x", &RegionMap::default()));
        assert!(matches!(result, Err(Error::InvalidRoute(_))));
        assert_eq!(sync.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn test_apply_before_initialize_fails() {
        let mut sync = FilterSync::new(RecordingNavigator::new());
        let result = sync.apply(&FilterChange::Stream("Management".into()));
        assert!(matches!(result, Err(Error::Lifecycle(_))));
    }

    #[test]
    fn test_identical_changes_navigate_once() {
        let mut sync = initialized("/colleges");
        let first = sync.apply(&FilterChange::Stream("Management".into())).unwrap();
        let second = sync.apply(&FilterChange::Stream("Management".into())).unwrap();

        assert_eq!(first.as_deref(), Some("/mba/top-colleges"));
        assert_eq!(second, None);
        assert_eq!(sync.navigator().writes(), ["/mba/top-colleges"]);
    }

    #[test]
    fn test_non_path_changes_do_not_navigate() {
        let mut sync = initialized("/mba/top-colleges");
        assert_eq!(sync.apply(&FilterChange::Name("IIM".into())).unwrap(), None);
        assert_eq!(sync.apply(&FilterChange::MinRating(4.0)).unwrap(), None);
        assert_eq!(sync.apply(&FilterChange::Type("Private".into())).unwrap(), None);
        assert!(sync.navigator().writes().is_empty());
        assert_eq!(sync.criteria().name(), "IIM");
    }

    #[test]
    fn test_location_changes_follow_stream() {
        let mut sync = initialized("/colleges");
        sync.apply(&FilterChange::Stream("Engineering".into()))
            .unwrap();
        sync.apply(&FilterChange::Region("Delhi NCR".into()))
            .unwrap();
        sync.apply(&FilterChange::City("Pune".into())).unwrap();
        sync.apply(&FilterChange::Clear).unwrap();

        assert_eq!(
            sync.navigator().writes(),
            [
                "/btech/top-colleges",
                "/btech/top-colleges-in-delhi-ncr",
                "/btech/top-colleges-in-pune",
                "/colleges",
            ]
        );
    }

    #[test]
    fn test_reset_allows_reinitialization() {
        let mut sync = initialized("/mba/top-colleges");
        sync.reset();
        assert_eq!(sync.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(sync.current_path(), None);
        assert!(sync.criteria().is_unfiltered());

        sync.initialize(&Route::parse("/btech/top-colleges", &RegionMap::default()))
            .unwrap();
        assert_eq!(sync.criteria().stream().named(), Some("Engineering"));
    }

    #[test]
    fn test_path_cache() {
        let mut cache = PathCache::default();
        assert!(!cache.is_current("/colleges"));
        cache.record("/colleges");
        assert!(cache.is_current("/colleges"));
        cache.clear();
        assert_eq!(cache.last(), None);
    }
}
