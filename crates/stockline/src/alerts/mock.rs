//! Test double for the notification seam.

use super::notifier::{AlertMessage, NotificationError, NotificationReceipt, Notifier};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A [`Notifier`] that records every message instead of delivering it, with
/// optional scripted failures for the next sends.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<AlertMessage>>>,
    failures: Arc<Mutex<VecDeque<NotificationError>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a failure for the next `send` call. Multiple calls queue up.
    pub fn fail_next(&self, error: NotificationError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Every message successfully "delivered" so far.
    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &AlertMessage) -> Result<NotificationReceipt, NotificationError> {
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(NotificationReceipt {
            message_id: format!("recorded-{}", sent.len()),
        })
    }
}
