use crate::domain::ports::{NotificationButton, Notifier};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Writes notifications to the log. Used when no Telegram credentials are set.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str, buttons: &[NotificationButton]) -> Result<()> {
        let links: Vec<&str> = buttons.iter().map(|b| b.url.as_str()).collect();
        info!("Notification: {} {:?}", text.replace('\n', " | "), links);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_delivery_never_fails() {
        let buttons = [NotificationButton::new("Open match", "https://example.test/m/1")];
        let result = tokio_test::block_on(LogNotifier.send("<b>line</b>\nsecond", &buttons));
        assert!(result.is_ok());
        assert_eq!(LogNotifier.name(), "log");
    }
}
