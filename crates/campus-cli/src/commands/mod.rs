//! Command implementations for the campus CLI
//!
//! Each command lives in its own submodule and takes already-loaded inputs
//! plus the resolved output format.

mod classify;
mod courses;
mod facets;
mod filter;
mod rankings;
mod route;
mod slug;

pub use classify::execute as classify_names;
pub use courses::execute as list_courses;
pub use facets::execute as show_facets;
pub use filter::execute as filter_listing;
pub use rankings::execute as show_rankings;
pub use route::execute as inspect_route;
pub use slug::execute as make_slug;
