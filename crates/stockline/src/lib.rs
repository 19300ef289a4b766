//! # Stockline
//!
//! An inventory production engine built on the [`resource_actor`] framework:
//! one actor owns the product catalog and its stock ledger, another archives
//! immutable production records, and a typed orchestration client converts
//! raw-material stock into finished-product stock transactionally.
//!
//! ## Transaction model
//!
//! The product actor processes messages sequentially, so a conditional stock
//! decrement is atomic per product. A production run spans many products;
//! atomicity across them comes from compensating rollback: every applied
//! mutation is recorded in a [`production_actor::saga::MutationLog`] and
//! reversed in reverse order if any later step fails. A production record
//! exists if and only if every one of its stock mutations applied.
//!
//! ## Modules
//!
//! - [`model`]: domain types and request DTOs
//! - [`product_actor`]: the stock ledger actor
//! - [`production_actor`]: the production record actor, provisioning,
//!   ratios, and the rollback log
//! - [`clients`]: [`ProductClient`](clients::ProductClient) and the
//!   orchestrating [`ProductionClient`](clients::ProductionClient)
//! - [`alerts`]: low-stock tracking and batched notifications
//! - [`stats`]: aggregation over production records
//! - [`config`]: environment-driven alert settings
//! - [`lifecycle`]: [`InventorySystem`](lifecycle::InventorySystem) wiring

pub mod alerts;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod production_actor;
pub mod stats;
