//! Typed clients wrapping the generic resource clients.

pub mod product_client;
pub mod production_client;

pub use product_client::ProductClient;
pub use production_client::ProductionClient;
