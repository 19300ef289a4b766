//! # ActorEntity Trait
//!
//! The contract every resource type (Product, Production, …) must implement to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). Associated types
//! pin down the IDs, DTOs, actions, context, and error type for one resource, so a
//! `Product` actor can never be handed a `Production` payload; the compiler rules
//! that class of bugs out entirely.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The `Context`
/// associated type carries those dependencies; it is injected into every hook via
/// [`ResourceActor::run`](crate::ResourceActor::run) ("late binding": dependencies
/// are wired when the actor starts, not when it is constructed).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g., a conditional stock decrement).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor: the union of every
    /// failure its hooks can produce, so clients pattern-match a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`; reject malformed payloads here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed, before it is stored.
    /// An `Err` here means the entity is never inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
