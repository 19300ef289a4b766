//! Domain types and request DTOs. The actor behavior for these types lives in
//! [`product_actor`](crate::product_actor) and
//! [`production_actor`](crate::production_actor).

pub mod product;
pub mod production;

pub use product::*;
pub use production::*;
