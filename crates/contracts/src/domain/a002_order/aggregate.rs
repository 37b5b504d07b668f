use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::common::AggregateId;
use crate::enums::OrderStatus;
use crate::shared::filter::{Dated, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Order identifier in the `ORD-###` format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub const PREFIX: &'static str = "ORD-";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `ORD-` followed by the number padded to three digits
    pub fn from_number(number: u32) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| format!("Order id must start with {}: {}", Self::PREFIX, s))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid order number: {}", s));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price
    pub price: f64,
}

/// Customer order fulfilled through MCF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), &self.customer_name]
    }
}

impl Dated for Order {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        assert_eq!(OrderId::from_number(7).as_str(), "ORD-007");
        assert!(OrderId::from_string("ORD-001").is_ok());
        assert!(OrderId::from_string("ORD-").is_err());
        assert!(OrderId::from_string("001").is_err());
    }

    #[test]
    fn test_wire_shape_skips_missing_tracking() {
        let order = Order {
            id: OrderId::new("ORD-001"),
            customer_name: "Sarah Johnson".into(),
            status: OrderStatus::Processing,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            total: 89.99,
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                quantity: 2,
                price: 29.99,
            }],
            shipping_address: "123 Green St, Portland, OR".into(),
            tracking_number: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerName"], "Sarah Johnson");
        assert_eq!(json["status"], "processing");
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["items"][0]["productId"], "1");
        assert!(json.get("trackingNumber").is_none());
        assert_eq!(order.item_count(), 2);
    }
}
