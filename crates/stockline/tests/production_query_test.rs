//! Tests for production history queries and statistics.

use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use stockline::alerts::RecordingNotifier;
use stockline::config::AlertConfig;
use stockline::lifecycle::InventorySystem;
use stockline::model::{
    DateRange, ProducedRequest, ProductCreate, ProductId, ProductionRequest, RawMaterialRequest,
};

fn start_system() -> InventorySystem {
    InventorySystem::start(
        Arc::new(RecordingNotifier::new()),
        AlertConfig::default().with_recipient("ops@example.com"),
    )
}

async fn seed_flour(system: &InventorySystem) -> ProductId {
    system
        .products
        .create_product(ProductCreate::raw("Flour", 0.8, 10_000.0))
        .await
        .unwrap()
}

async fn produce(
    system: &InventorySystem,
    flour: ProductId,
    date: chrono::DateTime<Utc>,
    quantity: f64,
    output: &str,
) {
    system
        .productions
        .create_production(ProductionRequest {
            date: Some(date),
            raw_materials: vec![RawMaterialRequest {
                product_id: flour,
                quantity,
            }],
            produced_products: vec![ProducedRequest::new_product(output, quantity / 2.0)],
            notes: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn listing_orders_by_date_then_creation_time_descending() {
    let system = start_system();
    let flour = seed_flour(&system).await;

    let march_3 = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
    let march_5 = Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap();

    // Created in this order: old date, new date, old date again.
    produce(&system, flour, march_3, 10.0, "Bread").await;
    produce(&system, flour, march_5, 20.0, "Rolls").await;
    produce(&system, flour, march_3, 30.0, "Crumbs").await;

    let records = system.productions.list_productions(None).await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, march_5);
    // Same business date: the later-created record comes first.
    assert_eq!(records[1].raw_materials[0].quantity, 30.0);
    assert_eq!(records[2].raw_materials[0].quantity, 10.0);

    system.shutdown().await;
}

#[tokio::test]
async fn date_range_filter_is_inclusive_of_both_bounds() {
    let system = start_system();
    let flour = seed_flour(&system).await;

    let start = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();

    produce(&system, flour, start, 10.0, "Bread").await;
    produce(&system, flour, end, 20.0, "Rolls").await;
    produce(
        &system,
        flour,
        Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap(),
        30.0,
        "Crumbs",
    )
    .await;

    let records = system
        .productions
        .list_productions(Some(DateRange::new(Some(start), Some(end))))
        .await
        .unwrap();
    assert_eq!(records.len(), 2);

    system.shutdown().await;
}

#[tokio::test]
async fn productions_for_date_covers_the_full_calendar_day() {
    let system = start_system();
    let flour = seed_flour(&system).await;

    let day = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
    let first_moment = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
    let last_moment = Utc.with_ymd_and_hms(2026, 3, 5, 23, 59, 59).unwrap();
    let next_day = Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap();

    produce(&system, flour, first_moment, 10.0, "Bread").await;
    produce(&system, flour, last_moment, 20.0, "Rolls").await;
    produce(&system, flour, next_day, 30.0, "Crumbs").await;

    let records = system.productions.productions_for_date(day).await.unwrap();
    assert_eq!(records.len(), 2);
    // Newest created first.
    assert_eq!(records[0].raw_materials[0].quantity, 20.0);

    system.shutdown().await;
}

#[tokio::test]
async fn stats_sum_per_name_over_the_filtered_records() {
    let system = start_system();
    let flour = seed_flour(&system).await;

    let march_3 = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
    let march_5 = Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap();

    produce(&system, flour, march_3, 10.0, "Bread").await;
    produce(&system, flour, march_5, 30.0, "Bread").await;

    let all = system.productions.production_stats(None).await.unwrap();
    assert_eq!(all.total_productions, 2);
    assert_eq!(all.total_raw_materials_used, 40.0);
    assert_eq!(all.total_products_produced, 20.0);
    assert_eq!(all.raw_materials_breakdown["Flour"], 40.0);
    assert_eq!(all.products_breakdown["Bread"], 20.0);

    let filtered = system
        .productions
        .production_stats(Some(DateRange::day(
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        )))
        .await
        .unwrap();
    assert_eq!(filtered.total_productions, 1);
    assert_eq!(filtered.total_raw_materials_used, 30.0);

    system.shutdown().await;
}
