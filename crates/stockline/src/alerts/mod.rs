//! # Low-Stock Alerts
//!
//! Watches stock levels and sends batched notifications when products cross
//! below the configured threshold.
//!
//! ## Structure
//!
//! - [`tracker`]: [`AlertTracker`], the crossing/cooldown state machine
//! - [`notifier`]: the [`Notifier`] delivery trait and [`LogNotifier`]
//! - [`format`]: batched message composition
//! - [`mock`]: [`RecordingNotifier`] test double

pub mod format;
pub mod mock;
pub mod notifier;
pub mod tracker;

pub use mock::RecordingNotifier;
pub use notifier::{AlertMessage, LogNotifier, NotificationError, NotificationReceipt, Notifier};
pub use tracker::{AlertOutcome, AlertTracker};
