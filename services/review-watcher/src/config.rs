//! Configuration types for the review watcher

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the Practicum OAuth token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the Telegram chat id
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub practicum: PracticumConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Homework API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            timeout_seconds: default_timeout(),
        }
    }
}

/// Telegram Bot API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_telegram_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: default_telegram_api_url(),
            bot_token: None,
            chat_id: None,
        }
    }
}

/// Poll cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_retry_interval")]
    pub retry_interval_seconds: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            retry_interval_seconds: default_retry_interval(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_retry_interval() -> u64 {
    600
}

impl Config {
    /// Fill secrets from the process environment. Environment values win over the file.
    pub fn resolve_secrets(&mut self) {
        self.resolve_secrets_with(|name| std::env::var(name).ok());
    }

    /// Fill secrets using an arbitrary lookup
    pub fn resolve_secrets_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(PRACTICUM_TOKEN_VAR) {
            self.practicum.token = Some(token);
        }
        if let Some(token) = lookup(TELEGRAM_TOKEN_VAR) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = lookup(TELEGRAM_CHAT_ID_VAR) {
            self.telegram.chat_id = Some(chat_id);
        }
    }

    /// Names of the required secrets that are absent or empty
    pub fn missing_secrets(&self) -> Vec<String> {
        [
            (PRACTICUM_TOKEN_VAR, &self.practicum.token),
            (TELEGRAM_TOKEN_VAR, &self.telegram.bot_token),
            (TELEGRAM_CHAT_ID_VAR, &self.telegram.chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::WatcherError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
