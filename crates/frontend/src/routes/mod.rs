pub mod registry;
pub mod routes;
