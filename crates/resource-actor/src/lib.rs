//! # Resource Actor
//!
//! Foundational building blocks for type-safe, concurrent actor systems in
//! Rust: a **Resource-Oriented** pattern on top of the **Actor Model**, where
//! each resource type gets one actor with completely isolated state and a
//! uniform CRUD + Action API.
//!
//! ## Architecture
//!
//! Three layers, each defined in its own module:
//!
//! 1. **Entity** ([`ActorEntity`]): your domain model and business logic.
//! 2. **Runtime** ([`ResourceActor`]): message processing and concurrency.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): type-safe
//!    communication over channels.
//!
//! Write the business logic once in the entity trait; the framework handles the
//! async message passing, error propagation, and state management.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor: no locks on the
//!   store, and any single message (including a read-check-mutate action such
//!   as a conditional stock decrement) is atomic with respect to every other
//!   message for that resource type.
//! - Multiple actors run in parallel and coordinate only through messages.
//!
//! ## Context Injection
//!
//! Dependencies are injected at runtime via [`ResourceActor::run`], not at
//! construction time. This late binding lets an actor whose entity hooks call
//! other actors be created before those other actors' clients exist.
//!
//! ## Testing
//!
//! The [`mock`] module ships a `MockClient` that implements the same API as the
//! real client but answers from a scripted expectation queue, for fast,
//! deterministic tests of client-side logic without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
