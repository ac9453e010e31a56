use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId};

/// A purchasable product.
///
/// Immutable once built. The on-disk/JSON shape uses camelCase keys
/// (`isPrescription`), and deserialization runs the same validation as
/// [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    category: String,
    is_prescription: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        is_prescription: bool,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if !id.is_positive() {
            return Err(DomainError::invalid_id("product id must be positive"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price,
            category,
            is_prescription,
        })
    }

    /// Build from values already known to be valid (built-in sample data).
    pub(crate) fn trusted(
        id: u32,
        name: &str,
        price: u64,
        category: &str,
        is_prescription: bool,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Money::new(price),
            category: category.to_string(),
            is_prescription,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Display-only "Rx" flag; no business rule hangs off it.
    pub fn is_prescription(&self) -> bool {
        self.is_prescription
    }
}

/// Wire shape of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
    category: String,
    #[serde(default)]
    is_prescription: bool,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.id, r.name, r.price, r.category, r.is_prescription)
    }
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
            is_prescription: p.is_prescription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_product() {
        let p = Product::new(ProductId::new(1), "Paracetamol 500mg", Money::new(15_000), "Pain Relief", false)
            .unwrap();
        assert_eq!(p.id(), ProductId::new(1));
        assert_eq!(p.name(), "Paracetamol 500mg");
        assert_eq!(p.price(), Money::new(15_000));
        assert_eq!(p.category(), "Pain Relief");
        assert!(!p.is_prescription());
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Product::new(ProductId::new(1), "   ", Money::ZERO, "Allergy", false).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_rejects_empty_category() {
        let err = Product::new(ProductId::new(1), "Cetirizine", Money::ZERO, "", false).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty category"),
        }
    }

    #[test]
    fn new_rejects_zero_id() {
        let err = Product::new(ProductId::new(0), "Cetirizine", Money::ZERO, "Allergy", false).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let p = Product::trusted(2, "Amoxicillin 500mg", 45_000, "Antibiotic", true);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["isPrescription"], serde_json::json!(true));
        assert_eq!(json["price"], serde_json::json!(45_000));

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn json_deserialization_validates() {
        let raw = r#"{"id": 9, "name": "", "price": 100, "category": "Allergy"}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }
}
