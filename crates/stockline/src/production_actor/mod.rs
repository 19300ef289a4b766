//! # Production Actor
//!
//! The production transaction engine: converts raw-material stock into
//! finished-product stock and archives an immutable record of each run.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Production`]
//! - [`provision`]: creation of new produced products before stock moves
//! - [`ratio`]: the conversion-ratio matrix
//! - [`saga`]: [`MutationLog`](saga::MutationLog), the compensating-rollback log
//! - [`error`]: [`ProductionError`] with its HTTP status classification
//! - [`new()`]: factory that creates the actor and its generic client

pub mod entity;
pub mod error;
pub mod provision;
pub mod ratio;
pub mod saga;

pub use entity::ProductionCreate;
pub use error::ProductionError;

use crate::model::Production;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Production actor and its client.
pub fn new() -> (ResourceActor<Production>, ResourceClient<Production>) {
    ResourceActor::new(32)
}
