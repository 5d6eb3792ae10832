//! # campus-core
//!
//! Listing normalization and discovery engine for a college-discovery portal.
//!
//! The crate turns the loosely shaped institution collection served by the
//! portal's data service into things a listing page can rely on:
//!
//! - **Slugs**: deterministic, idempotent URL segments for names ([`slug`])
//! - **Classification**: free-text program names mapped onto a fixed stream
//!   taxonomy, plus stream family aliases ([`classify`])
//! - **Regions**: city alias groups and states for location filters ([`region`])
//! - **Rankings**: best rank per stream and year from heterogeneous ranking
//!   payloads ([`ranking`])
//! - **Filter sync**: criteria, canonical paths, and a loop-free
//!   criteria/path synchronizer ([`criteria`], [`route`], [`sync`])
//! - **Filtering**: ordered, monotonic multi-criterion filtering ([`filter`])
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_core::{Catalog, FilterCriteria, RegionMap, apply_filters, listing_path};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"id": 1, "name": "IIM Lucknow", "location": "Lucknow, Uttar Pradesh", "stream": "MBA"},
//!     {"id": 2, "name": "IIT Delhi", "location": "New Delhi, Delhi", "stream": ["B.Tech"]}
//! ]"#)?;
//!
//! let mut criteria = FilterCriteria::new();
//! criteria.select_stream("Management");
//!
//! let found = apply_filters(catalog.institutions(), &criteria, &RegionMap::default());
//! assert_eq!(found.len(), 1);
//! assert_eq!(listing_path(&criteria), "/mba/top-colleges");
//! # Ok::<(), campus_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Engine functions are total and do not fail. Fallible operations (file
//! loading, configuration, synchronizer lifecycle) return [`Result<T>`]:
//!
//! ```rust
//! use campus_core::{Catalog, Error};
//!
//! match Catalog::from_json_str(r#"{"items": []}"#) {
//!     Err(Error::Parse(msg)) => eprintln!("not a catalog: {msg}"),
//!     Err(e) => eprintln!("[{}] {e}", e.category()),
//!     Ok(catalog) => println!("{} institutions", catalog.len()),
//! }
//! ```

/// Stream classification and stream family aliases
pub mod classify;
/// Configuration file handling
pub mod config;
/// Cross-institution course catalog
pub mod courses;
/// Listing filter criteria
pub mod criteria;
/// Error types and result aliases
pub mod error;
/// Filter option lists
pub mod facets;
/// Listing filter engine
pub mod filter;
/// Institution and program records
pub mod model;
/// Ranking table aggregation
pub mod ranking;
/// Region groups and states
pub mod region;
/// Canonical paths and path parsing
pub mod route;
/// Listing page copy
pub mod seo;
/// Slug codec
pub mod slug;
/// Criteria/path synchronization
pub mod sync;

// Re-export commonly used types
pub use classify::{Stream, classify};
pub use config::{Config, DataConfig, ListingConfig};
pub use courses::{CourseEntry, build_catalog};
pub use criteria::{FilterCriteria, Selection};
pub use error::{Error, Result};
pub use facets::{Facets, extract_facets};
pub use filter::{apply_filters, paginate};
pub use model::{Catalog, Institution, Program};
pub use ranking::{RankingEntry, RankingTable, build_table};
pub use region::{RegionGroup, RegionMap};
pub use route::{Route, listing_path};
pub use seo::SiteCopy;
pub use slug::{to_program_slug, to_slug};
pub use sync::{FilterChange, FilterSync, Lifecycle, Navigator, RecordingNavigator};
