//! Alert configuration, read from the environment.

use std::time::Duration;
use tracing::warn;

const DEFAULT_THRESHOLD: f64 = 10.0;
const COOLDOWN: Duration = Duration::from_secs(60 * 60);

/// Settings for the low-stock alert tracker.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Stock levels strictly below this are considered low.
    pub threshold: f64,
    /// Minimum interval between alerts for the same product.
    pub cooldown: Duration,
    /// Where alerts go. `None` means alerts are skipped with a warning.
    pub recipient: Option<String>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            cooldown: COOLDOWN,
            recipient: None,
        }
    }
}

impl AlertConfig {
    /// Reads `LOW_STOCK_THRESHOLD` (default 10) and `ADMIN_EMAIL` from the
    /// environment. An unparseable threshold falls back to the default with a
    /// warning rather than failing startup.
    pub fn from_env() -> Self {
        let threshold = match std::env::var("LOW_STOCK_THRESHOLD") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(%raw, "Invalid LOW_STOCK_THRESHOLD, using default");
                    DEFAULT_THRESHOLD
                }
            },
            Err(_) => DEFAULT_THRESHOLD,
        };
        let recipient = std::env::var("ADMIN_EMAIL").ok().filter(|s| !s.is_empty());

        Self {
            threshold,
            cooldown: COOLDOWN,
            recipient,
        }
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }
}
