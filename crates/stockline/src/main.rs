//! Demo: seed a small catalog, run a production, inspect the results.
//!
//! Run with `RUST_LOG=debug cargo run -p stockline` for the full trace.

use resource_actor::tracing::setup_tracing;
use std::sync::Arc;
use stockline::alerts::LogNotifier;
use stockline::config::AlertConfig;
use stockline::lifecycle::InventorySystem;
use stockline::model::{ProducedRequest, ProductCreate, ProductionRequest, RawMaterialRequest};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AlertConfig::from_env().with_recipient("ops@example.com");
    let system = InventorySystem::start(Arc::new(LogNotifier), config);

    info!("--- Seeding catalog ---");
    let flour = system
        .products
        .create_product(ProductCreate::raw("Flour", 0.8, 100.0))
        .await?;
    let water = system
        .products
        .create_product(ProductCreate::raw("Water", 0.0, 500.0))
        .await?;

    info!("--- Running a production ---");
    let record = system
        .productions
        .create_production(ProductionRequest {
            date: None,
            raw_materials: vec![
                RawMaterialRequest {
                    product_id: flour,
                    quantity: 30.0,
                },
                RawMaterialRequest {
                    product_id: water,
                    quantity: 20.0,
                },
            ],
            produced_products: vec![ProducedRequest::new_product("Bread", 15.0)],
            notes: Some("morning batch".into()),
        })
        .await?;
    info!(
        id = %record.id,
        ratios = record.ratios.len(),
        "Production completed"
    );

    let flour_left = system.products.check_stock(flour).await?;
    info!(flour_left, "Raw stock after the run");

    info!("--- Exhausting flour to trigger an alert ---");
    let depleting = system
        .productions
        .create_production(ProductionRequest {
            date: None,
            raw_materials: vec![RawMaterialRequest {
                product_id: flour,
                quantity: 65.0,
            }],
            produced_products: vec![ProducedRequest::new_product("Crackers", 200.0)],
            notes: None,
        })
        .await?;
    info!(id = %depleting.id, "Second production completed");

    info!("--- Stats ---");
    let stats = system.productions.production_stats(None).await?;
    info!(
        productions = stats.total_productions,
        raw_used = stats.total_raw_materials_used,
        produced = stats.total_products_produced,
        "Aggregate totals"
    );

    system.shutdown().await;
    Ok(())
}
