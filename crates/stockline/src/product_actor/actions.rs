//! Stock-ledger actions for the Product actor.
//!
//! Every mutation of a product's stock goes through one of these actions, and
//! the actor processes one action at a time, so each variant is an atomic
//! read-check-mutate against that product.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Conditional debit: `stock -= quantity` only if `stock >= quantity`.
    ///
    /// # Errors
    /// [`ProductError::InsufficientStock`](super::ProductError::InsufficientStock)
    /// carrying the stock level at the moment of failure.
    Consume { quantity: f64 },
    /// Credit from a production run: `stock += quantity` and stamp
    /// `last_restocked`.
    Restock { quantity: f64 },
    /// Credit that reverses an earlier `Consume` during rollback. Does not
    /// touch `last_restocked`.
    Release { quantity: f64 },
    /// Saturating debit that reverses an earlier `Restock` during rollback.
    /// Clamps at zero if a concurrent consumer raced the rollback.
    Revoke { quantity: f64 },
}

/// Results from ProductActions. Variants match 1:1 with [`ProductAction`],
/// each carrying the post-action stock level.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CheckStock(f64),
    Consume(f64),
    Restock(f64),
    Release(f64),
    Revoke(f64),
}
