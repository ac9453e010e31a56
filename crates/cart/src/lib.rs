//! Shopping cart domain module.
//!
//! The cart is a small aggregate: commands are decided by `handle` (pure),
//! turned into events, and folded into state by `apply`. Quantities are
//! clamped to `[0, 99]`, lines are unique per product, and totals are derived
//! from each line's price snapshot. No IO, no locking.

pub mod cart;
pub mod command;
pub mod event;
pub mod line;

pub use cart::Cart;
pub use command::{AddItem, CartCommand, ClearCart, RemoveItem, UpdateQuantity};
pub use event::{CartCleared, CartEvent, ItemAdded, ItemRemoved, QuantityChanged};
pub use line::CartLine;
