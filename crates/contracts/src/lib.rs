pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod sample_data;
pub mod shared;
pub mod system;
