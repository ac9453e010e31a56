use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{CartId, ProductId, Quantity};
use storefront_events::Event;

/// Event: ItemAdded (a new line was created).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    /// Snapshot of the catalog product at add time.
    pub product: Product,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged (an existing line got a new, non-zero quantity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub product_name: String,
    pub previous: Quantity,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved (a line left the cart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub product_name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub removed_lines: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl CartEvent {
    pub fn cart_id(&self) -> CartId {
        match self {
            CartEvent::ItemAdded(e) => e.cart_id,
            CartEvent::QuantityChanged(e) => e.cart_id,
            CartEvent::ItemRemoved(e) => e.cart_id,
            CartEvent::CartCleared(e) => e.cart_id,
        }
    }

    /// The product this event concerns, if it concerns a single one.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::ItemAdded(e) => Some(e.product.id()),
            CartEvent::QuantityChanged(e) => Some(e.product_id),
            CartEvent::ItemRemoved(e) => Some(e.product_id),
            CartEvent::CartCleared(_) => None,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::QuantityChanged(_) => "cart.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item_removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}
