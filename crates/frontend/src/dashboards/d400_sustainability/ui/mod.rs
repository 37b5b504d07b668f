mod dashboard;

pub use dashboard::SustainabilityDashboard;
