//! `storefront-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and the
//! cart (no IO, no presentation concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod money;
pub mod quantity;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::{CartId, ProductId};
pub use money::Money;
pub use quantity::Quantity;
