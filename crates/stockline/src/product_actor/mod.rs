//! # Product Actor
//!
//! The Product resource actor is the stock ledger: it owns every product's
//! `stock` counter and serializes all mutations, which is what makes the
//! conditional decrement (`Consume`) atomic per product.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`actions`]: [`ProductAction`] / [`ProductActionResult`] ledger operations
//! - [`error`]: [`ProductError`]
//! - [`new()`]: factory that creates the actor and its generic client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32)
}
