use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use thiserror::Error;

use storefront_core::{DomainError, ProductId};

use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Immutable product catalog.
///
/// Products keep their declaration order; lookups go through an id index.
/// Share it read-only (e.g. behind an `Arc`) between the cart and the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id(), pos).is_some() {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// The built-in four-product pharmacy catalog.
    pub fn sample() -> Self {
        let products = vec![
            Product::trusted(1, "Paracetamol 500mg", 15_000, "Pain Relief", false),
            Product::trusted(2, "Amoxicillin 500mg", 45_000, "Antibiotic", true),
            Product::trusted(3, "Vitamin C 1000mg", 30_000, "Supplement", false),
            Product::trusted(4, "Cetirizine 10mg", 20_000, "Allergy", false),
        ];
        let index = products.iter().enumerate().map(|(pos, p)| (p.id(), pos)).collect();
        Self { products, index }
    }

    /// Parse a JSON array of products.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Ok(Self::new(products)?)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Every product, in declaration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// Distinct categories, sorted ascending.
    pub fn list_categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    #[test]
    fn sample_lists_four_products_in_declaration_order() {
        let catalog = Catalog::sample();
        let names: Vec<_> = catalog.list_all().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["Paracetamol 500mg", "Amoxicillin 500mg", "Vitamin C 1000mg", "Cetirizine 10mg"]
        );
    }

    #[test]
    fn sample_passes_validation() {
        let sample = Catalog::sample();
        let rebuilt = Catalog::new(sample.list_all().to_vec()).unwrap();
        assert_eq!(rebuilt, sample);
    }

    #[test]
    fn get_by_id_hits_and_misses() {
        let catalog = Catalog::sample();
        let amox = catalog.get_by_id(ProductId::new(2)).unwrap();
        assert_eq!(amox.name(), "Amoxicillin 500mg");
        assert_eq!(amox.price(), Money::new(45_000));
        assert!(amox.is_prescription());

        assert!(catalog.get_by_id(ProductId::new(99)).is_none());
        assert!(catalog.get_by_id(ProductId::new(0)).is_none());
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.list_categories(),
            vec!["Allergy", "Antibiotic", "Pain Relief", "Supplement"]
        );

        let mut products = catalog.list_all().to_vec();
        products.push(Product::new(ProductId::new(5), "Ibuprofen 200mg", Money::new(18_000), "Pain Relief", false).unwrap());
        let extended = Catalog::new(products).unwrap();
        assert_eq!(extended.list_categories().len(), 4);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let a = Product::new(ProductId::new(1), "A", Money::new(1), "X", false).unwrap();
        let b = Product::new(ProductId::new(1), "B", Money::new(2), "Y", false).unwrap();
        let err = Catalog::new(vec![a, b]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate product id 1") => {}
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn from_json_reads_camel_case_array() {
        let raw = r#"[
            {"id": 10, "name": "Loratadine 10mg", "price": 25000, "category": "Allergy", "isPrescription": false},
            {"id": 11, "name": "Azithromycin 250mg", "price": 60000, "category": "Antibiotic", "isPrescription": true}
        ]"#;
        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_by_id(ProductId::new(11)).unwrap().is_prescription());
    }

    #[test]
    fn from_json_surfaces_parse_and_domain_errors() {
        assert!(matches!(Catalog::from_json("not json"), Err(CatalogError::Parse(_))));

        let dup = r#"[
            {"id": 1, "name": "A", "price": 1, "category": "X"},
            {"id": 1, "name": "B", "price": 1, "category": "X"}
        ]"#;
        assert!(matches!(Catalog::from_json(dup), Err(CatalogError::Domain(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
