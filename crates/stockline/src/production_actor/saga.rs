//! Compensating rollback for multi-product stock mutations.
//!
//! The product actor serializes mutations per product, but a production run
//! touches many products and there is no multi-entity transaction. The
//! [`MutationLog`] records every mutation as it is applied; if any later step
//! fails, [`rollback`](MutationLog::rollback) replays the log in reverse with
//! the inverse operation, restoring every stock level before the error
//! surfaces.

use crate::clients::ProductClient;
use crate::model::ProductId;
use crate::product_actor::ProductError;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
enum AppliedMutation {
    Debit { product_id: ProductId, quantity: f64 },
    Credit { product_id: ProductId, quantity: f64 },
}

/// Records the stock mutations of one production attempt.
pub struct MutationLog {
    products: ProductClient,
    applied: Vec<AppliedMutation>,
}

impl MutationLog {
    pub fn new(products: ProductClient) -> Self {
        Self {
            products,
            applied: Vec::new(),
        }
    }

    /// Conditional debit of a raw material. Recorded only if it applied.
    pub async fn debit(&mut self, product_id: ProductId, quantity: f64) -> Result<f64, ProductError> {
        let level = self.products.consume(product_id, quantity).await?;
        self.applied.push(AppliedMutation::Debit {
            product_id,
            quantity,
        });
        Ok(level)
    }

    /// Credit of a produced product. Recorded only if it applied.
    pub async fn credit(
        &mut self,
        product_id: ProductId,
        quantity: f64,
    ) -> Result<f64, ProductError> {
        let level = self.products.restock(product_id, quantity).await?;
        self.applied.push(AppliedMutation::Credit {
            product_id,
            quantity,
        });
        Ok(level)
    }

    /// The transaction committed; the recorded mutations are final.
    pub fn commit(mut self) {
        debug!(mutations = self.applied.len(), "Production mutations committed");
        self.applied.clear();
    }

    /// Reverses every recorded mutation in reverse order. Debits are released,
    /// credits are revoked. Individual reversal failures are logged and
    /// skipped so the remaining mutations still get reversed.
    pub async fn rollback(self) {
        warn!(
            mutations = self.applied.len(),
            "Rolling back production mutations"
        );
        for mutation in self.applied.into_iter().rev() {
            let result = match mutation {
                AppliedMutation::Debit {
                    product_id,
                    quantity,
                } => self.products.release(product_id, quantity).await,
                AppliedMutation::Credit {
                    product_id,
                    quantity,
                } => self.products.revoke(product_id, quantity).await,
            };
            if let Err(e) = result {
                warn!(?mutation, error = %e, "Rollback step failed");
            }
        }
    }
}
