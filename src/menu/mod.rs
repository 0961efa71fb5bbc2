//! Menu catalog: data model, hand-authored content, and query operations.

pub mod catalog;
pub mod data;
pub mod model;

pub use catalog::{Catalog, CatalogError};
pub use model::{CategoryLayout, MenuCategory, MenuItem, MenuSection, MenuTag};
