//! Telegram Bot API transport

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::TelegramConfig;
use crate::io::HttpClient;
use crate::notifier::ChatTransport;

/// Sends chat messages through `sendMessage` of the Telegram Bot API
pub struct TelegramTransport {
    send_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramTransport {
    // The URL embeds the bot token, keep it out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramTransport").finish_non_exhaustive()
    }
}

impl TelegramTransport {
    pub fn new(api_url: &str, bot_token: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created TelegramTransport at {}", api_url);
        Self {
            send_url: format!(
                "{}/bot{}/sendMessage",
                api_url.trim_end_matches('/'),
                bot_token
            ),
            http,
        }
    }

    pub fn from_config(config: &TelegramConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(
            &config.api_url,
            config.bot_token.as_deref().unwrap_or_default(),
            http,
        )
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> crate::Result<()> {
        tracing::debug!("Sending Telegram message to chat {}", chat_id);

        let response = self
            .http
            .post_form(&self.send_url, &[("chat_id", chat_id), ("text", text)])
            .await
            .map_err(|e| crate::WatcherError::Delivery(e.to_string()))?;

        if !response.is_success() {
            return Err(crate::WatcherError::Delivery(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        tracing::debug!("Telegram message delivered");
        Ok(())
    }
}
