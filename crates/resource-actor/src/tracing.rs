//! # Observability & Tracing
//!
//! Structured logging setup for actor systems. Every actor operation (create,
//! get, list, update, delete, action) is logged with structured fields, and
//! client methods open spans via `#[instrument]`, so `RUST_LOG=debug` shows the
//! complete request flow with full payloads while `RUST_LOG=info` stays compact.
//!
//! The format hides module paths (`with_target(false)`); the actor loop already
//! tags every line with the `entity_type` field instead.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
