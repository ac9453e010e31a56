//! Storefront session: one catalog, one cart, one set of filters.
//!
//! Every cart operation runs synchronously against the [`Cart`] aggregate and
//! then publishes the applied events on the bus. Presentation code subscribes
//! once and drains the subscription after each user action.
//!
//! ```text
//! user action → Cart::handle → Cart::apply → EventBus::publish → subscribers
//! ```

use std::sync::Arc;

use thiserror::Error;

use storefront_cart::{Cart, CartEvent};
use storefront_catalog::{Catalog, FilterCriteria, Product, filter_products};
use storefront_core::{ProductId, Quantity};
use storefront_events::{Event, EventBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The cart already changed; only the notification to subscribers failed.
    #[error("cart updated but publishing {event_type} failed: {reason}")]
    Publish {
        event_type: &'static str,
        reason: String,
    },
}

#[derive(Debug)]
pub struct Storefront<B> {
    catalog: Arc<Catalog>,
    cart: Cart,
    criteria: FilterCriteria,
    bus: B,
}

impl<B> Storefront<B> {
    pub fn new(catalog: Arc<Catalog>, bus: B) -> Self {
        let cart = Cart::new(catalog.clone());
        tracing::info!(cart_id = %cart.id_typed(), products = catalog.len(), "storefront session started");
        Self {
            catalog,
            cart,
            criteria: FilterCriteria::new(),
            bus,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Catalog products matching the current search text and category.
    pub fn visible_products(&self) -> Vec<Product> {
        filter_products(
            self.catalog.list_all(),
            self.criteria.search_text(),
            &self.criteria.category_filter(),
        )
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.list_categories()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.set_search_text(text);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.set_category(category);
    }

    pub fn reset_filters(&mut self) {
        self.criteria.reset_filters();
    }

    /// Units of `product_id` currently in the cart (zero when absent).
    pub fn quantity_in_cart(&self, product_id: ProductId) -> Quantity {
        self.cart
            .get_item(product_id)
            .map(|line| line.quantity())
            .unwrap_or(Quantity::ZERO)
    }
}

impl<B> Storefront<B>
where
    B: EventBus<CartEvent>,
{
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> Result<Vec<CartEvent>, DispatchError> {
        let events = self.cart.add_item(product_id, quantity);
        self.publish(events)
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<Vec<CartEvent>, DispatchError> {
        let events = self.cart.update_quantity(product_id, quantity);
        self.publish(events)
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> Result<Vec<CartEvent>, DispatchError> {
        let events = self.cart.remove_item(product_id);
        self.publish(events)
    }

    pub fn clear_cart(&mut self) -> Result<Vec<CartEvent>, DispatchError> {
        let events = self.cart.clear_cart();
        self.publish(events)
    }

    /// Quantity control on a product card: zero removes, a product not yet in
    /// the cart is added, anything else replaces the quantity.
    pub fn set_product_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<Vec<CartEvent>, DispatchError> {
        if quantity <= 0 {
            self.update_quantity(product_id, 0)
        } else if self.cart.get_item(product_id).is_none() {
            self.add_item(product_id, quantity)
        } else {
            self.update_quantity(product_id, quantity)
        }
    }

    /// "+" button: one more unit, capped at 99.
    pub fn increment(&mut self, product_id: ProductId) -> Result<Vec<CartEvent>, DispatchError> {
        let next = self.quantity_in_cart(product_id).step_up();
        self.set_product_quantity(product_id, i64::from(next.get()))
    }

    /// "-" button: one unit fewer; reaching zero removes the line.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<Vec<CartEvent>, DispatchError> {
        let next = self.quantity_in_cart(product_id).step_down();
        self.set_product_quantity(product_id, i64::from(next.get()))
    }

    fn publish(&self, events: Vec<CartEvent>) -> Result<Vec<CartEvent>, DispatchError> {
        for event in &events {
            tracing::debug!(event_type = event.event_type(), product_id = ?event.product_id(), "cart event");
            self.bus
                .publish(event.clone())
                .map_err(|e| DispatchError::Publish {
                    event_type: event.event_type(),
                    reason: e.to_string(),
                })?;
        }
        Ok(events)
    }
}
