use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an MCF order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Wire code, also used as the value of the status filter chips
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "neutral",
            OrderStatus::Processing => "warning",
            OrderStatus::Shipped => "info",
            OrderStatus::Delivered => "success",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ]
    }

    /// Exact parse of the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

impl OrderStatus {
    /// Parse a display name such as "Shipped"
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.display_name() == name)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("lost"), None);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(OrderStatus::from_code("Shipped"), None);
        assert_eq!(OrderStatus::from_code(" shipped"), None);
        assert_eq!(
            OrderStatus::from_display_name("Shipped"),
            Some(OrderStatus::Shipped)
        );
        assert_eq!(OrderStatus::from_display_name("shipped"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
