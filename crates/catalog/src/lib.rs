//! Product catalog domain module.
//!
//! The catalog is an immutable product list with id lookup and category
//! listing. Searching is a pure function over a product slice plus the
//! user's current [`FilterCriteria`]. No IO beyond optionally reading a JSON
//! catalog file at startup.

pub mod catalog;
pub mod criteria;
pub mod filter;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use criteria::FilterCriteria;
pub use filter::{CategoryFilter, filter_products};
pub use product::Product;
