pub mod order_status;
pub mod product_category;

pub use order_status::OrderStatus;
