//! Low-stock alert tracking with per-product cooldowns.
//!
//! The tracker answers one question after every stock change: should this
//! change trigger an alert? A product alerts when it *crosses* below the
//! threshold (or its previous level is unknown), at most once per cooldown
//! window. Delivery failures are soft: they are logged and reported in the
//! outcome, never propagated to the caller that moved the stock.
//!
//! The cooldown map is process-local by design; running several instances
//! against a shared catalog would need a shared store instead.

use super::format;
use super::notifier::{NotificationError, Notifier};
use crate::clients::ProductClient;
use crate::config::AlertConfig;
use crate::model::{Product, ProductId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// What a low-stock check concluded.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// Stock is at or above the threshold; any cooldown state was cleared.
    StockOk,
    /// The product was already below the threshold before this change.
    AlreadyLow,
    /// An alert for this product went out within the cooldown window.
    CoolingDown,
    /// A batched alert went out covering these product names.
    Sent { products: Vec<String> },
    /// Delivery failed; the error is recorded here and nowhere else.
    SendFailed { error: NotificationError },
}

/// Tracks which products have alerted recently and sends batched alerts.
#[derive(Clone)]
pub struct AlertTracker {
    products: ProductClient,
    notifier: Arc<dyn Notifier>,
    config: AlertConfig,
    last_alert: Arc<Mutex<HashMap<ProductId, Instant>>>,
}

impl AlertTracker {
    pub fn new(products: ProductClient, notifier: Arc<dyn Notifier>, config: AlertConfig) -> Self {
        Self {
            products,
            notifier,
            config,
            last_alert: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Evaluates one product after a stock change.
    ///
    /// `previous_stock` is the level before the change, if the caller knows
    /// it. `None` is treated as a potential crossing, so callers that cannot
    /// cheaply know the previous level (such as the production engine after a
    /// commit) still alert.
    pub async fn check_product(
        &self,
        product: &Product,
        previous_stock: Option<f64>,
    ) -> AlertOutcome {
        if product.stock >= self.config.threshold {
            let mut map = match self.last_alert.lock() {
                Ok(map) => map,
                Err(poisoned) => poisoned.into_inner(),
            };
            if map.remove(&product.id).is_some() {
                debug!(product = %product.name, "Stock recovered, cooldown cleared");
            }
            return AlertOutcome::StockOk;
        }

        if let Some(previous) = previous_stock {
            if previous < self.config.threshold {
                debug!(product = %product.name, "Already below threshold, no alert");
                return AlertOutcome::AlreadyLow;
            }
        }

        {
            let map = match self.last_alert.lock() {
                Ok(map) => map,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(last) = map.get(&product.id) {
                if last.elapsed() < self.config.cooldown {
                    debug!(product = %product.name, "Alert cooldown active");
                    return AlertOutcome::CoolingDown;
                }
            }
        }

        self.send_batch().await
    }

    /// The scheduled-sweep entry point: alert on every currently-low product,
    /// regardless of crossings or cooldowns, and stamp their cooldowns.
    pub async fn check_all(&self) -> AlertOutcome {
        self.send_batch().await
    }

    /// Gathers every low product, sends one batched message, and stamps the
    /// cooldown for all included products iff delivery succeeded.
    async fn send_batch(&self) -> AlertOutcome {
        let low = match self.products.find_low_stock(self.config.threshold).await {
            Ok(low) => low,
            Err(e) => {
                warn!(error = %e, "Could not gather low-stock products");
                return AlertOutcome::SendFailed {
                    error: NotificationError::Other(e.to_string()),
                };
            }
        };
        if low.is_empty() {
            return AlertOutcome::StockOk;
        }

        let Some(recipient) = self.config.recipient.as_deref() else {
            warn!("Low stock detected but no alert recipient is configured");
            return AlertOutcome::SendFailed {
                error: NotificationError::RecipientMissing,
            };
        };

        let message = format::low_stock_message(recipient, &low, self.config.threshold);
        match self.notifier.send(&message).await {
            Ok(receipt) => {
                let now = Instant::now();
                let mut map = match self.last_alert.lock() {
                    Ok(map) => map,
                    Err(poisoned) => poisoned.into_inner(),
                };
                for product in &low {
                    map.insert(product.id, now);
                }
                info!(
                    count = low.len(),
                    message_id = %receipt.message_id,
                    "Low stock alert sent"
                );
                AlertOutcome::Sent {
                    products: low.into_iter().map(|p| p.name).collect(),
                }
            }
            Err(error) => {
                match &error {
                    NotificationError::Authentication(detail) => {
                        warn!(%detail, "Alert delivery failed: authentication")
                    }
                    NotificationError::Connection(detail) => {
                        warn!(%detail, "Alert delivery failed: connection")
                    }
                    NotificationError::Rejected { code, response } => {
                        warn!(code, %response, "Alert delivery failed: rejected by server")
                    }
                    other => warn!(error = %other, "Alert delivery failed"),
                }
                AlertOutcome::SendFailed { error }
            }
        }
    }
}
