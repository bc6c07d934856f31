//! Review Watcher - homework review status notifications
//!
//! Polls the Practicum homework API, detects review status changes, and
//! forwards them to a Telegram chat.

pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod status;
pub mod telegram;
pub mod tracker;
pub mod watcher;

pub use config::{load_config, Config};
pub use error::{Result, WatcherError};
pub use watcher::{Iteration, Watcher};

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::io::{HttpClient, ReqwestHttpClient};
use crate::notifier::{ChatTransport, Notifier};
use crate::practicum::PracticumClient;
use crate::telegram::TelegramTransport;

/// Assembles a [`Watcher`] from configuration, with optional injected collaborators
pub struct WatcherBuilder {
    config: Config,
    http: Option<Arc<dyn HttpClient>>,
    transport: Option<Arc<dyn ChatTransport>>,
    cancel: Option<CancellationToken>,
    start_time: Option<i64>,
}

impl WatcherBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: None,
            transport: None,
            cancel: None,
            start_time: None,
        }
    }

    /// Use this HTTP client instead of a reqwest one
    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Deliver messages through this transport instead of Telegram
    pub fn with_transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Unix time the process started at; the first poll window begins one interval earlier
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Check required secrets and wire the watcher.
    ///
    /// Fails with `MissingConfiguration` naming every absent secret.
    pub fn build(self) -> Result<Watcher> {
        let missing = self.config.missing_secrets();
        if !missing.is_empty() {
            for name in &missing {
                tracing::error!("CRITICAL: Отсутствует переменная окружения: {}", name);
            }
            return Err(WatcherError::MissingConfiguration(missing));
        }

        let http: Arc<dyn HttpClient> = match self.http {
            Some(http) => http,
            None => Arc::new(ReqwestHttpClient::with_timeout(Duration::from_secs(
                self.config.practicum.timeout_seconds,
            ))?),
        };

        let transport: Arc<dyn ChatTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(TelegramTransport::from_config(
                &self.config.telegram,
                Arc::clone(&http),
            )),
        };

        let chat_id = self.config.telegram.chat_id.clone().unwrap_or_default();
        let retry_interval = Duration::from_secs(self.config.polling.retry_interval_seconds);
        let start_time = self
            .start_time
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        tracing::debug!(
            "Building watcher: endpoint={}, transport={}, interval={:?}",
            self.config.practicum.endpoint,
            transport.type_name(),
            retry_interval
        );

        Ok(Watcher::new(
            PracticumClient::from_config(&self.config.practicum, http),
            Notifier::new(chat_id, transport),
            watcher::initial_cursor(start_time, retry_interval),
            retry_interval,
            self.cancel.unwrap_or_else(CancellationToken::new),
        ))
    }
}
