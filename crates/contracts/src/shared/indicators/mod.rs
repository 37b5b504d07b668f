use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as the card key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    /// Whole number followed by a unit, e.g. `1250 kg`
    Quantity { unit: String },
    Integer,
}

/// Visual accent of the indicator card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Info,
    Warning,
    Neutral,
}

/// A single stat card: static metadata plus its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatIndicator {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Primary numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Secondary text displayed below the value.
    pub subtitle: Option<String>,
}
