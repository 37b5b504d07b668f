pub mod aggregate;

pub use aggregate::{Product, ProductCatalog, ProductId};
