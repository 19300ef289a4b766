//! System startup and shutdown wiring.

pub mod system;

pub use system::InventorySystem;
