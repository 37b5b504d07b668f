use serde::{Deserialize, Serialize};

/// One month of the sales overview and order volume charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: f64,
    pub orders: u32,
}

/// Bar of the "Top Products" chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
}
