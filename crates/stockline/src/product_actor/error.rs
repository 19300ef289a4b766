//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested debit exceeds the available stock. `available` is the
    /// stock level at the moment the debit was attempted.
    #[error("Insufficient stock for {name}. Available: {available}, Required: {required}")]
    InsufficientStock {
        name: String,
        available: f64,
        required: f64,
    },

    /// The provided quantity is invalid (zero or negative).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),

    /// The creation or update payload is malformed.
    #[error("Product validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunication(msg)
    }
}
