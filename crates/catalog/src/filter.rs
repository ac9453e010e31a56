//! Product search: name substring + category.

use crate::product::Product;

/// Category stage of a product search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    /// Category picker sentinel meaning "every category".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Map a picker selection to a filter; `None` and `"all"` mean [`CategoryFilter::All`].
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => Self::All,
            Some(s) if s == Self::ALL_SENTINEL => Self::All,
            Some(s) => Self::Only(s.to_string()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category() == category,
        }
    }
}

/// Filter `products` by a case-insensitive name query and a category.
///
/// An empty (or whitespace-only) query and [`CategoryFilter::All`] are no-op
/// stages. Input order is preserved.
pub fn filter_products(products: &[Product], search_text: &str, category: &CategoryFilter) -> Vec<Product> {
    let query = search_text.trim().to_lowercase();

    products
        .iter()
        .filter(|p| query.is_empty() || p.name().to_lowercase().contains(&query))
        .filter(|p| category.matches(p))
        .cloned()
        .collect()
}
