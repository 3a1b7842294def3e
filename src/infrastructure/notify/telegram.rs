//! Telegram Bot API notifications
//!
//! Sends HTML messages through `sendMessage`, with optional inline URL buttons.

use crate::config::NotifierEnvConfig;
use crate::domain::ports::{NotificationButton, Notifier};
use crate::infrastructure::core::HttpClientFactory;
use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use tracing::{debug, error, info};

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboard<'a>>,
}

#[derive(Serialize)]
struct InlineKeyboard<'a> {
    inline_keyboard: Vec<Vec<InlineButton<'a>>>,
}

#[derive(Serialize)]
struct InlineButton<'a> {
    text: &'a str,
    url: &'a str,
}

/// Telegram notification client
pub struct TelegramNotifier {
    client: ClientWithMiddleware,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// `None` unless both the bot token and the chat id are configured.
    pub fn from_config(config: &NotifierEnvConfig) -> Option<Self> {
        let token = config.bot_token.as_deref()?;
        let chat_id = config.chat_id.clone()?;
        info!("Telegram notifications enabled");
        Some(Self {
            client: HttpClientFactory::create_retrying_client(config.max_retries),
            endpoint: format!(
                "{}/bot{}/sendMessage",
                config.api_url.trim_end_matches('/'),
                token
            ),
            chat_id,
        })
    }

    fn payload<'a>(&'a self, text: &'a str, buttons: &'a [NotificationButton]) -> SendMessage<'a> {
        let reply_markup = if buttons.is_empty() {
            None
        } else {
            Some(InlineKeyboard {
                inline_keyboard: vec![
                    buttons
                        .iter()
                        .map(|b| InlineButton {
                            text: &b.text,
                            url: &b.url,
                        })
                        .collect(),
                ],
            })
        };

        SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
            reply_markup,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str, buttons: &[NotificationButton]) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.payload(text, buttons))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Telegram notification sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!("Telegram notification failed: {} - {}", status, body);
        bail!("Telegram API returned HTTP {}: {}", status, body)
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
