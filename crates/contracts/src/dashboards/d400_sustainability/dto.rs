use crate::shared::config::EcoScoreConfig;
use crate::shared::indicators::{IndicatorId, IndicatorStatus, StatIndicator, ValueFormat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers of the sustainability dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: u32,
    pub low_stock: u32,
    pub pending_orders: u32,
    pub monthly_revenue: f64,
    /// kg CO2
    pub carbon_offset: u32,
    /// liters
    pub water_saved: u32,
    /// kWh
    pub energy_saved: u32,
    pub trees_planted: u32,
}

impl DashboardStats {
    /// The four sustainability cards, in display order
    pub fn sustainability_indicators(&self) -> Vec<StatIndicator> {
        vec![
            card(
                "carbon_offset",
                "Carbon Offset",
                "leaf",
                self.carbon_offset,
                ValueFormat::Quantity { unit: "kg".into() },
                IndicatorStatus::Good,
                "CO\u{2082} Equivalent",
            ),
            card(
                "water_saved",
                "Water Saved",
                "droplet",
                self.water_saved,
                ValueFormat::Quantity { unit: "L".into() },
                IndicatorStatus::Info,
                "Through Optimization",
            ),
            card(
                "energy_saved",
                "Energy Saved",
                "wind",
                self.energy_saved,
                ValueFormat::Quantity { unit: "kWh".into() },
                IndicatorStatus::Warning,
                "Renewable Energy",
            ),
            card(
                "trees_planted",
                "Trees Planted",
                "tree-pine",
                self.trees_planted,
                ValueFormat::Integer,
                IndicatorStatus::Good,
                "Carbon Offset Program",
            ),
        ]
    }
}

fn card(
    id: &str,
    label: &str,
    icon: &str,
    value: u32,
    format: ValueFormat,
    status: IndicatorStatus,
    subtitle: &str,
) -> StatIndicator {
    StatIndicator {
        id: IndicatorId::new(id),
        label: label.to_string(),
        icon: icon.to_string(),
        format,
        status,
        value: Some(f64::from(value)),
        subtitle: Some(subtitle.to_string()),
    }
}

/// One month of the sustainability line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityPoint {
    pub month: String,
    pub carbon: f64,
    pub water: f64,
    pub energy: f64,
}

/// Display-only environmental rating of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcoRating {
    High,
    Medium,
    Low,
}

impl EcoRating {
    pub fn from_score(score: u8, thresholds: &EcoScoreConfig) -> Self {
        if score >= thresholds.high {
            EcoRating::High
        } else if score >= thresholds.medium {
            EcoRating::Medium
        } else {
            EcoRating::Low
        }
    }

    pub fn badge_modifier(&self) -> &'static str {
        match self {
            EcoRating::High => "success",
            EcoRating::Medium => "warning",
            EcoRating::Low => "error",
        }
    }
}

/// Row of the "Recent Orders" card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    /// Display status as shown on the card, e.g. "Shipped"
    pub status: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub eco_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eco_rating_thresholds() {
        let thresholds = EcoScoreConfig::default();
        assert_eq!(EcoRating::from_score(92, &thresholds), EcoRating::High);
        assert_eq!(EcoRating::from_score(90, &thresholds), EcoRating::High);
        assert_eq!(EcoRating::from_score(85, &thresholds), EcoRating::Medium);
        assert_eq!(EcoRating::from_score(70, &thresholds), EcoRating::Medium);
        assert_eq!(EcoRating::from_score(69, &thresholds), EcoRating::Low);
    }

    #[test]
    fn test_sustainability_cards_order() {
        let stats = crate::sample_data::dashboard_stats();
        let cards = stats.sustainability_indicators();
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Carbon Offset", "Water Saved", "Energy Saved", "Trees Planted"]
        );
        assert_eq!(cards[0].value, Some(1250.0));
        assert_eq!(cards[3].format, ValueFormat::Integer);
    }
}
