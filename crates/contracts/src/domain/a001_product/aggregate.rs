use crate::domain::common::AggregateId;
use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier, a decimal sequence number kept as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Product id must not be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product sold through own stock and Amazon MCF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Unit price. May be NaN when the lenient submit policy accepted bad input.
    pub price: f64,
    pub stock: u32,
    /// Units held in Amazon fulfillment centers
    pub amazon_stock: u32,
    pub category: String,
    /// Image URI
    pub image: String,
}

impl Product {
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku]
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Canonical in-memory product collection. Append-only, insertion ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    items: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifier the next appended product receives
    pub fn next_id(&self) -> ProductId {
        ProductId(crate::domain::common::next_sequential_id(
            self.items.iter().map(|p| p.id.as_str()),
        ))
    }

    pub fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn low_stock_count(&self, threshold: u32) -> usize {
        self.items
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            sku: format!("SKU{id}"),
            price: 1.0,
            stock,
            amazon_stock: 5,
            category: "Kitchen".into(),
            image: String::new(),
        }
    }

    #[test]
    fn test_next_id_follows_highest_suffix() {
        let catalog = ProductCatalog::new(vec![product("1", 10), product("7", 10)]);
        assert_eq!(catalog.next_id(), ProductId::new("8"));
    }

    #[test]
    fn test_low_stock_threshold_is_exclusive() {
        let catalog = ProductCatalog::new(vec![product("1", 99), product("2", 100)]);
        assert_eq!(catalog.low_stock_count(100), 1);
        assert!(catalog.items()[0].is_low_stock(100));
        assert!(!catalog.items()[1].is_low_stock(100));
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let json = serde_json::to_value(product("3", 1)).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["amazonStock"], 5);
        assert!(json.get("amazon_stock").is_none());
    }

    #[test]
    fn test_product_id_rejects_blank() {
        assert!(ProductId::from_string("  ").is_err());
        assert_eq!(ProductId::from_string("4").unwrap().as_string(), "4");
    }
}
