//! # Inventory System Lifecycle
//!
//! Startup order: actors are constructed first (which creates the client
//! channels), clients and the alert tracker are wired, then the actor loops
//! are spawned. Shutdown is the reverse: dropping every client closes the
//! request channels, each actor drains its queue and exits, and `shutdown`
//! joins the tasks so no in-flight request is lost.

use crate::alerts::{AlertTracker, Notifier};
use crate::clients::{ProductClient, ProductionClient};
use crate::config::AlertConfig;
use crate::{product_actor, production_actor};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// The running system: both actors and the typed clients wired to them.
pub struct InventorySystem {
    pub products: ProductClient,
    pub productions: ProductionClient,
    pub alerts: AlertTracker,
    product_handle: JoinHandle<()>,
    production_handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns the product and production actors and wires the clients.
    pub fn start(notifier: Arc<dyn Notifier>, config: AlertConfig) -> Self {
        let (product_actor, product_channel) = product_actor::new();
        let (production_actor, production_channel) = production_actor::new();

        let products = ProductClient::new(product_channel);
        let alerts = AlertTracker::new(products.clone(), notifier, config);
        let productions =
            ProductionClient::new(production_channel, products.clone(), alerts.clone());

        let product_handle = tokio::spawn(product_actor.run(()));
        let production_handle = tokio::spawn(production_actor.run(()));
        info!("Inventory system started");

        Self {
            products,
            productions,
            alerts,
            product_handle,
            production_handle,
        }
    }

    /// Graceful shutdown: drops every client, then waits for both actors to
    /// drain their queues and exit.
    pub async fn shutdown(self) {
        let Self {
            products,
            productions,
            alerts,
            product_handle,
            production_handle,
        } = self;

        // Every clone of the request senders must go before the loops exit.
        drop(productions);
        drop(alerts);
        drop(products);

        let _ = production_handle.await;
        let _ = product_handle.await;
        info!("Inventory system stopped");
    }
}
