//! Integration settings: Amazon MCF credentials, warehouse, notifications.
//!
//! Field setters take the form control name so one change handler can serve
//! a whole section of the form.

use crate::shared::error::FormError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McfCredentials {
    pub seller_id: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub low_stock: bool,
    pub new_orders: bool,
    pub shipment_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            low_stock: true,
            new_orders: true,
            shipment_updates: false,
        }
    }
}

/// Notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    LowStock,
    NewOrders,
    ShipmentUpdates,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::LowStock,
        NotificationKind::NewOrders,
        NotificationKind::ShipmentUpdates,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "lowStock",
            NotificationKind::NewOrders => "newOrders",
            NotificationKind::ShipmentUpdates => "shipmentUpdates",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "Low Stock Alerts",
            NotificationKind::NewOrders => "New Order Notifications",
            NotificationKind::ShipmentUpdates => "Shipment Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "Get notified when inventory is running low",
            NotificationKind::NewOrders => "Receive notifications for new orders",
            NotificationKind::ShipmentUpdates => "Get notifications for shipment status changes",
        }
    }
}

/// Whole settings form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    pub mcf: McfCredentials,
    pub notifications: NotificationSettings,
    pub warehouse: WarehouseInfo,
}

impl SettingsState {
    /// `sellerId`, `accessKey` or `secretKey`
    pub fn set_mcf_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = match name {
            "sellerId" => &mut self.mcf.seller_id,
            "accessKey" => &mut self.mcf.access_key,
            "secretKey" => &mut self.mcf.secret_key,
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// `name`, `address`, `city`, `state` or `zip`
    pub fn set_warehouse_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let slot = match name {
            "name" => &mut self.warehouse.name,
            "address" => &mut self.warehouse.address,
            "city" => &mut self.warehouse.city,
            "state" => &mut self.warehouse.state,
            "zip" => &mut self.warehouse.zip,
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn notification(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::LowStock => self.notifications.low_stock,
            NotificationKind::NewOrders => self.notifications.new_orders,
            NotificationKind::ShipmentUpdates => self.notifications.shipment_updates,
        }
    }

    /// Flip one toggle; returns the new value
    pub fn toggle_notification(&mut self, kind: NotificationKind) -> bool {
        let slot = match kind {
            NotificationKind::LowStock => &mut self.notifications.low_stock,
            NotificationKind::NewOrders => &mut self.notifications.new_orders,
            NotificationKind::ShipmentUpdates => &mut self.notifications.shipment_updates,
        };
        *slot = !*slot;
        *slot
    }

    /// Copy safe to log: access and secret keys are masked
    pub fn redacted(&self) -> SettingsState {
        let mut copy = self.clone();
        copy.mcf.access_key = mask(&copy.mcf.access_key);
        copy.mcf.secret_key = mask(&copy.mcf.secret_key);
        copy
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_notification_presets() {
        let settings = SettingsState::default();
        assert!(settings.notification(NotificationKind::LowStock));
        assert!(settings.notification(NotificationKind::NewOrders));
        assert!(!settings.notification(NotificationKind::ShipmentUpdates));
        assert_eq!(settings.mcf, McfCredentials::default());
    }

    #[test]
    fn test_mcf_setter_touches_one_field() {
        let mut settings = SettingsState::default();
        settings.set_mcf_field("sellerId", "A1B2C3").unwrap();

        assert_eq!(settings.mcf.seller_id, "A1B2C3");
        assert!(settings.mcf.access_key.is_empty());
        assert_eq!(settings.warehouse, WarehouseInfo::default());
    }

    #[test]
    fn test_warehouse_setter_and_unknown_field() {
        let mut settings = SettingsState::default();
        settings.set_warehouse_field("zip", "97201").unwrap();
        assert_eq!(settings.warehouse.zip, "97201");

        let err = settings.set_warehouse_field("country", "US").unwrap_err();
        assert_eq!(err, FormError::UnknownField("country".into()));
        assert!(settings.set_mcf_field("zip", "1").is_err());
    }

    #[test]
    fn test_toggle_flips_only_selected_notification() {
        let mut settings = SettingsState::default();
        assert!(settings.toggle_notification(NotificationKind::ShipmentUpdates));
        assert!(!settings.toggle_notification(NotificationKind::LowStock));
        assert!(settings.notification(NotificationKind::NewOrders));
    }

    #[test]
    fn test_redacted_masks_keys_for_logging() {
        let mut settings = SettingsState::default();
        settings.set_mcf_field("accessKey", "AKIA123").unwrap();
        settings.set_mcf_field("sellerId", "SELLER").unwrap();

        let json = serde_json::to_string(&settings.redacted()).unwrap();
        assert!(!json.contains("AKIA123"));
        assert!(json.contains("SELLER"));
        assert!(json.contains("\"secretKey\":\"\""));
    }
}
