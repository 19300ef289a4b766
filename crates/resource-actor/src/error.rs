//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific failures
//! travel through [`FrameworkError::EntityError`] as a boxed `std::error::Error`,
//! which domain clients can downcast back to the typed error.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
