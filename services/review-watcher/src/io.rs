//! HTTP client abstraction for testability

use std::time::Duration;

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request with query parameters and extra headers
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> crate::Result<HttpResponse>;

    /// Send a POST request with form-encoded body
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::WatcherError::Http(format!("Building HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> crate::Result<HttpResponse> {
        let url = reqwest::Url::parse_with_params(url, query)
            .map_err(|e| crate::WatcherError::Http(format!("Invalid URL {}: {}", url, e)))?;
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(url.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| crate::WatcherError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::WatcherError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    /// The URL may carry credentials in its path, so it never reaches logs or errors
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse> {
        tracing::debug!("POST form with {} fields", params.len());
        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| {
                crate::WatcherError::Http(format!("POST failed: {}", e.without_url()))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            crate::WatcherError::Http(format!("Reading response body: {}", e.without_url()))
        })?;

        tracing::debug!("POST -> {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }
}
