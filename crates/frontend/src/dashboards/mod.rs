pub mod d400_sustainability;
pub mod d401_analytics;

pub use d400_sustainability::ui::SustainabilityDashboard;
pub use d401_analytics::ui::AnalyticsDashboard;
