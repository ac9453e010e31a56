use std::convert::Infallible;
use std::sync::Arc;

use chrono::Utc;

use storefront_catalog::Catalog;
use storefront_core::{Aggregate, AggregateRoot, CartId, Money, ProductId, Quantity};

use crate::command::{AddItem, CartCommand, ClearCart, RemoveItem, UpdateQuantity};
use crate::event::{CartCleared, CartEvent, ItemAdded, ItemRemoved, QuantityChanged};
use crate::line::CartLine;

/// Aggregate root: Cart.
///
/// Lines are kept in insertion order and are unique per product. Every
/// mutation goes through [`Aggregate::handle`] + [`Aggregate::apply`]; the
/// convenience methods (`add_item`, `update_quantity`, ...) do both and return
/// the applied events so callers can publish them. Operations that change
/// nothing return no events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    catalog: Arc<Catalog>,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_id(CartId::new(), catalog)
    }

    pub fn with_id(id: CartId, catalog: Arc<Catalog>) -> Self {
        Self {
            id,
            catalog,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current lines, in the order they were first added.
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get_item(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    /// Units in the cart across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Sum of line subtotals at snapshot prices.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// Merges into an existing line (saturating at 99), otherwise creates one
    /// when the clamped quantity is positive. Unknown products are ignored.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> Vec<CartEvent> {
        self.run(CartCommand::AddItem(AddItem {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Add a single unit ("Add to Cart" button).
    pub fn add_one(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.add_item(product_id, 1)
    }

    /// Replace a line's quantity; zero removes the line, a missing line is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> Vec<CartEvent> {
        self.run(CartCommand::UpdateQuantity(UpdateQuantity {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.run(CartCommand::RemoveItem(RemoveItem {
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    pub fn clear_cart(&mut self) -> Vec<CartEvent> {
        self.run(CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        }))
    }

    fn run(&mut self, command: CartCommand) -> Vec<CartEvent> {
        match self.execute(&command) {
            Ok(events) => events,
            Err(never) => match never {},
        }
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            // Replayed events may carry zero; a line never holds it.
            CartEvent::ItemAdded(e) if e.quantity.is_zero() => self.drop_line(e.product.id()),
            CartEvent::QuantityChanged(e) if e.quantity.is_zero() => self.drop_line(e.product_id),
            CartEvent::ItemAdded(e) => match self.line_mut(e.product.id()) {
                Some(line) => line.set_quantity(e.quantity),
                None => self.lines.push(CartLine::new(e.product.clone(), e.quantity)),
            },
            CartEvent::QuantityChanged(e) => {
                if let Some(line) = self.line_mut(e.product_id) {
                    line.set_quantity(e.quantity);
                }
            }
            CartEvent::ItemRemoved(e) => self.drop_line(e.product_id),
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::UpdateQuantity(cmd) => self.handle_update(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        };
        Ok(events)
    }
}

impl Cart {
    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id() == product_id)
    }

    fn drop_line(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id() != product_id);
    }

    fn handle_add(&self, cmd: &AddItem) -> Vec<CartEvent> {
        let Some(product) = self.catalog.get_by_id(cmd.product_id) else {
            tracing::debug!(product_id = %cmd.product_id, "add_item ignored: unknown product");
            return Vec::new();
        };

        if let Some(line) = self.get_item(cmd.product_id) {
            let merged = line.quantity().saturating_add(cmd.quantity);
            return self.transition(line, merged, cmd.occurred_at);
        }

        let quantity = Quantity::clamped(cmd.quantity);
        if quantity.is_zero() {
            tracing::debug!(product_id = %cmd.product_id, requested = cmd.quantity, "add_item ignored: zero quantity");
            return Vec::new();
        }

        vec![CartEvent::ItemAdded(ItemAdded {
            cart_id: self.id,
            product: product.clone(),
            quantity,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_update(&self, cmd: &UpdateQuantity) -> Vec<CartEvent> {
        let Some(line) = self.get_item(cmd.product_id) else {
            tracing::debug!(product_id = %cmd.product_id, "update_quantity ignored: not in cart");
            return Vec::new();
        };

        self.transition(line, Quantity::clamped(cmd.quantity), cmd.occurred_at)
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        match self.get_item(cmd.product_id) {
            Some(line) => vec![self.removed(line, cmd.occurred_at)],
            None => Vec::new(),
        }
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Vec<CartEvent> {
        vec![CartEvent::CartCleared(CartCleared {
            cart_id: self.id,
            removed_lines: self.lines.len(),
            occurred_at: cmd.occurred_at,
        })]
    }

    /// Move an existing line to `target`: unchanged, changed or removed.
    fn transition(
        &self,
        line: &CartLine,
        target: Quantity,
        occurred_at: chrono::DateTime<Utc>,
    ) -> Vec<CartEvent> {
        if target.is_zero() {
            return vec![self.removed(line, occurred_at)];
        }
        if target == line.quantity() {
            return Vec::new();
        }

        vec![CartEvent::QuantityChanged(QuantityChanged {
            cart_id: self.id,
            product_id: line.product_id(),
            product_name: line.product().name().to_string(),
            previous: line.quantity(),
            quantity: target,
            occurred_at,
        })]
    }

    fn removed(&self, line: &CartLine, occurred_at: chrono::DateTime<Utc>) -> CartEvent {
        CartEvent::ItemRemoved(ItemRemoved {
            cart_id: self.id,
            product_id: line.product_id(),
            product_name: line.product().name().to_string(),
            occurred_at,
        })
    }
}
