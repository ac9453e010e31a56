use storefront_cart::CartEvent;

/// The control a cart change came from; wording differs between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CartControl {
    /// "Add to Cart" button on a product card.
    #[default]
    AddButton,
    /// Quantity stepper on a product card.
    ProductCard,
    /// Quantity stepper on a cart line.
    CartLine,
}

/// Short user-facing message shown after a cart change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn from_event(event: &CartEvent, control: CartControl) -> Self {
        match event {
            CartEvent::ItemAdded(e) if control == CartControl::AddButton && e.quantity.get() == 1 => Self::new(
                "Added to cart",
                format!("{} has been added to your cart.", e.product.name()),
            ),
            CartEvent::ItemAdded(e) => Self::new(
                "Added to cart",
                format!("{} ({}) added to cart.", e.product.name(), e.quantity),
            ),
            CartEvent::QuantityChanged(e) if control == CartControl::CartLine => Self::new(
                "Quantity updated",
                format!("{} quantity updated to {}.", e.product_name, e.quantity),
            ),
            CartEvent::QuantityChanged(e) => {
                let direction = if e.quantity > e.previous { "increased" } else { "decreased" };
                Self::new(
                    "Quantity updated",
                    format!("{} quantity {direction} to {}.", e.product_name, e.quantity),
                )
            }
            CartEvent::ItemRemoved(e) => Self::new(
                "Removed from cart",
                format!("{} has been removed from your cart.", e.product_name),
            ),
            CartEvent::CartCleared(e) if e.removed_lines == 0 => {
                Self::new("Cart cleared", "Your cart was already empty.")
            }
            CartEvent::CartCleared(e) => Self::new(
                "Cart cleared",
                format!(
                    "{} {} removed from your cart.",
                    e.removed_lines,
                    if e.removed_lines == 1 { "product" } else { "products" }
                ),
            ),
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
