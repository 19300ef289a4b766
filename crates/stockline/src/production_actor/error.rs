//! Error types for production transactions.

use thiserror::Error;

/// Errors that can occur while running or querying productions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductionError {
    /// The request payload is malformed or violates a business rule.
    #[error("{0}")]
    Validation(String),

    /// A referenced product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A raw-material debit exceeded the available stock. The figures are the
    /// real-time values at the moment the debit was attempted.
    #[error("Insufficient stock for {name}. Available: {available}, Required: {required}")]
    InsufficientStock {
        name: String,
        available: f64,
        required: f64,
    },

    /// Creating one of the new produced products failed.
    #[error("Failed to provision new products: {0}")]
    Provisioning(String),

    /// The engine's view of the catalog diverged mid-transaction.
    #[error("{0}")]
    Consistency(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl ProductionError {
    /// The HTTP status an API layer would map this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            ProductionError::Validation(_) => 400,
            ProductionError::NotFound(_) => 404,
            ProductionError::InsufficientStock { .. } => 409,
            ProductionError::Provisioning(_)
            | ProductionError::Consistency(_)
            | ProductionError::ActorCommunication(_) => 500,
        }
    }
}

impl From<String> for ProductionError {
    fn from(msg: String) -> Self {
        ProductionError::ActorCommunication(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_classify_by_kind() {
        assert_eq!(ProductionError::Validation("x".into()).status_code(), 400);
        assert_eq!(ProductionError::NotFound("x".into()).status_code(), 404);
        assert_eq!(
            ProductionError::InsufficientStock {
                name: "Flour".into(),
                available: 2.0,
                required: 5.0,
            }
            .status_code(),
            409
        );
        assert_eq!(
            ProductionError::Provisioning("x".into()).status_code(),
            500
        );
        assert_eq!(ProductionError::Consistency("x".into()).status_code(), 500);
    }

    #[test]
    fn insufficient_stock_message_carries_real_time_figures() {
        let err = ProductionError::InsufficientStock {
            name: "Flour".into(),
            available: 3.5,
            required: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Flour. Available: 3.5, Required: 10"
        );
    }
}
