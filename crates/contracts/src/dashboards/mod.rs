pub mod d400_sustainability;
pub mod d401_analytics;
