//! Practicum homework status API client

use std::sync::Arc;

use serde_json::Value;

use crate::config::PracticumConfig;
use crate::io::HttpClient;

/// Client for the homework status endpoint
pub struct PracticumClient {
    endpoint: String,
    auth_header: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: &str, http: Arc<dyn HttpClient>) -> Self {
        let endpoint = endpoint.into();
        tracing::debug!("Created PracticumClient for {}", endpoint);
        Self {
            endpoint,
            auth_header: format!("OAuth {}", token),
            http,
        }
    }

    pub fn from_config(config: &PracticumConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.token.as_deref().unwrap_or_default(),
            http,
        )
    }

    /// Fetch homework statuses changed since `cursor`. `None` means "now".
    ///
    /// Performs exactly one request; retrying is left to the caller.
    pub async fn fetch(&self, cursor: Option<i64>) -> crate::Result<Value> {
        let from_date = cursor
            .unwrap_or_else(|| chrono::Utc::now().timestamp())
            .to_string();

        let response = self
            .http
            .get(
                &self.endpoint,
                &[("from_date", from_date.as_str())],
                &[("Authorization", self.auth_header.as_str())],
            )
            .await
            .map_err(|e| crate::WatcherError::ApiUnavailable(format!("Общая ошибка API: {}", e)))?;

        if !response.is_success() {
            return Err(crate::WatcherError::ApiUnavailable(format!(
                "Код ответа API: {}",
                response.status
            )));
        }

        tracing::debug!("API практикума доступно. Код: {}", response.status);

        serde_json::from_str(&response.body)
            .map_err(|e| crate::WatcherError::ResponseDecode(e.to_string()))
    }
}
