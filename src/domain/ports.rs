use crate::domain::errors::FetchError;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to the sports-data source. Paths are relative to the API root,
/// e.g. `sport/football/events/live` or `event/123/statistics`.
#[async_trait]
pub trait SportsDataSource: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError>;
}

/// Inline button attached to a notification (rendered as a URL button by Telegram).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationButton {
    pub text: String,
    pub url: String,
}

impl NotificationButton {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

// Need async_trait for async functions in traits
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message. Implementations retry on their own and return the final error.
    async fn send(&self, text: &str, buttons: &[NotificationButton]) -> Result<()>;

    fn name(&self) -> &str;
}
