pub mod config;
pub mod error;
pub mod filter;
pub mod form_state;
pub mod indicators;
pub mod router;
