//! The notification delivery seam.
//!
//! Alert composition and cooldown logic live in
//! [`AlertTracker`](super::AlertTracker); delivery goes through the
//! [`Notifier`] trait so the transport (SMTP, webhook, whatever) stays a
//! pluggable collaborator. [`LogNotifier`] is the tracing-only implementation
//! used by the demo binary.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// A composed alert ready for delivery.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub recipient: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Proof of delivery from the transport.
#[derive(Debug, Clone)]
pub struct NotificationReceipt {
    pub message_id: String,
}

/// Delivery failures, classified so callers can tell configuration problems
/// from transient transport problems.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    #[error("No alert recipient is configured")]
    RecipientMissing,
    #[error("Notification authentication failed: {0}")]
    Authentication(String),
    #[error("Could not connect to the notification server: {0}")]
    Connection(String),
    #[error("Notification rejected by server ({code}): {response}")]
    Rejected { code: u16, response: String },
    #[error("Notification failed: {0}")]
    Other(String),
}

/// Delivers composed alerts.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &AlertMessage) -> Result<NotificationReceipt, NotificationError>;
}

/// Logs the alert instead of delivering it.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &AlertMessage) -> Result<NotificationReceipt, NotificationError> {
        info!(
            recipient = %message.recipient,
            subject = %message.subject,
            "Alert (log delivery)\n{}",
            message.text_body
        );
        Ok(NotificationReceipt {
            message_id: format!("log-{}", chrono::Utc::now().timestamp_millis()),
        })
    }
}
