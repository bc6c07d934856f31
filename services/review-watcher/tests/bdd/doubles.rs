//! Test doubles for the HTTP and chat collaborators

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use review_watcher::io::{HttpClient, HttpResponse};
use review_watcher::notifier::ChatTransport;
use review_watcher::WatcherError;

/// An HTTP client that answers GETs from a script and records the query of each one
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    script: Mutex<VecDeque<review_watcher::Result<HttpResponse>>>,
    queries: Mutex<Vec<Vec<(String, String)>>>,
}

impl ScriptedHttpClient {
    pub fn push(&self, response: review_watcher::Result<HttpResponse>) {
        self.script.lock().unwrap().push_back(response);
    }

    pub fn push_ok(&self, body: String) {
        self.push(Ok(HttpResponse { status: 200, body }));
    }

    /// `from_date` of every request made so far
    pub fn from_dates(&self) -> Vec<i64> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|query| query.iter().find(|(k, _)| k == "from_date"))
            .map(|(_, v)| v.parse().expect("from_date is not an integer"))
            .collect()
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(
        &self,
        _url: &str,
        query: &[(&str, &str)],
        _headers: &[(&str, &str)],
    ) -> review_watcher::Result<HttpResponse> {
        self.queries.lock().unwrap().push(
            query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WatcherError::Http("script exhausted".to_string())))
    }

    async fn post_form(
        &self,
        url: &str,
        _params: &[(&str, &str)],
    ) -> review_watcher::Result<HttpResponse> {
        Err(WatcherError::Http(format!("unexpected POST {}", url)))
    }
}

/// A chat transport that records every delivery attempt and can be switched to failing
#[derive(Debug, Default)]
pub struct RecordingTransport {
    failing: AtomicBool,
    attempts: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatTransport for RecordingTransport {
    fn type_name(&self) -> &str {
        "recording"
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> review_watcher::Result<()> {
        self.attempts.lock().unwrap().push(text.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(WatcherError::Delivery("chat unavailable".to_string()));
        }
        Ok(())
    }
}
