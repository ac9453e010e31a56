//! Plain-text views for the terminal shell.

use std::fmt::Write as _;

use storefront_cart::Cart;
use storefront_catalog::Product;

use crate::config::CurrencyStyle;

/// Product grid as text, with the cart quantity next to products already in the cart.
pub fn render_products(products: &[Product], cart: &Cart, style: CurrencyStyle) -> String {
    if products.is_empty() {
        return "No products found\nTry adjusting your search or filter criteria\n".to_string();
    }

    let mut out = String::new();
    for product in products {
        let _ = write!(
            out,
            "[{}] {}{} ({}) {}",
            product.id(),
            product.name(),
            if product.is_prescription() { " [Rx]" } else { "" },
            product.category(),
            style.format(product.price()),
        );
        match cart.get_item(product.id()) {
            Some(line) => {
                let _ = writeln!(out, "  | in cart: {}", line.quantity());
            }
            None => out.push('\n'),
        }
    }
    out
}

/// Category picker as text; the active selection is starred.
pub fn render_categories(categories: &[String], selected: Option<&str>) -> String {
    let mut out = String::new();
    let marker = |active: bool| if active { "*" } else { " " };

    let _ = writeln!(out, "{} all (All Categories)", marker(selected.is_none()));
    for category in categories {
        let _ = writeln!(out, "{} {category}", marker(selected == Some(category.as_str())));
    }
    out
}

/// Cart summary with per-line subtotals and the grand total.
pub fn render_cart(cart: &Cart, style: CurrencyStyle) -> String {
    if cart.is_empty() {
        return "Shopping Cart\nYour cart is empty\nAdd some products to get started!\n".to_string();
    }

    let count = cart.line_count();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Shopping Cart ({count} {})",
        if count == 1 { "item" } else { "items" }
    );

    for line in cart.items() {
        let product = line.product();
        let _ = writeln!(
            out,
            "  [{}] {} ({}) {} each x {} = {}",
            product.id(),
            product.name(),
            product.category(),
            style.format(product.price()),
            line.quantity(),
            style.format(line.subtotal()),
        );
    }

    let _ = writeln!(out, "Grand Total: {}", style.format(cart.total_price()));
    out
}
