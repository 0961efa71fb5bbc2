//! Sukino Cafe & Kitchen
//!
//! Menu catalog for the cafe site:
//! - `menu/`: typed catalog (categories, sections, items, tags), startup
//!   validation, and the read-only query surface
//! - `site`: static cafe facts (address, hours, story) for the page templates
//! - `server` + `web/` (feature `web`): axum server rendering the four site
//!   pages and exposing a JSON API over the catalog
//!
//! The catalog is built once, validated, and never mutated; every query is a
//! pure borrow with no synchronization required.

pub mod menu;
pub mod site;

#[cfg(feature = "web")]
pub mod server;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use menu::{Catalog, CatalogError, CategoryLayout, MenuCategory, MenuItem, MenuSection, MenuTag};

#[cfg(feature = "web")]
pub use server::{create_router, AppState};
