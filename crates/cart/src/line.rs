use storefront_catalog::Product;
use storefront_core::{Money, ProductId, Quantity};

/// One cart entry: a product snapshot and how many units of it.
///
/// Only the cart creates or changes lines, which keeps `quantity` in `[1, 99]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: Quantity,
}

impl CartLine {
    pub(crate) fn new(product: Product, quantity: Quantity) -> Self {
        debug_assert!(!quantity.is_zero(), "cart lines never hold zero units");
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Product as it was when first added to the cart.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// `snapshot price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.product.price().times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
