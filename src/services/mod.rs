pub mod seed;
pub mod store;

pub use seed::loader_from_config;
pub use store::{DashboardState, Store};
