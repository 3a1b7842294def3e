//! Notification channel configuration.

use super::{non_empty_var, parse_env};
use anyhow::Result;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Notifier environment configuration
#[derive(Debug, Clone)]
pub struct NotifierEnvConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_url: String,
    pub max_retries: u32,
}

impl Default for NotifierEnvConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            max_retries: 3,
        }
    }
}

impl NotifierEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: non_empty_var("BOT_TOKEN"),
            chat_id: non_empty_var("CHAT_ID"),
            api_url: non_empty_var("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            max_retries: parse_env("NOTIFY_MAX_RETRIES", 3u32)?,
        })
    }

    /// Telegram is used only when both credentials are present.
    pub fn telegram_enabled(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}
