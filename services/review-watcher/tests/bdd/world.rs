//! BDD test world for the review watcher

use std::sync::Arc;

use cucumber::World;
use review_watcher::response::ParsedResponse;
use review_watcher::{Iteration, Watcher};

use crate::doubles::{RecordingTransport, ScriptedHttpClient};

#[derive(Debug, Default, World)]
pub struct ReviewWatcherWorld {
    // Polling
    pub http: Option<Arc<ScriptedHttpClient>>,
    pub transport: Option<Arc<RecordingTransport>>,
    pub watcher: Option<Watcher>,
    pub iterations: Vec<Iteration>,

    // Response validation
    pub parsed: Option<ParsedResponse>,

    // Status extraction
    pub described: Option<review_watcher::Result<String>>,
}

impl ReviewWatcherWorld {
    pub fn http(&self) -> &ScriptedHttpClient {
        self.http.as_deref().expect("watcher not started")
    }

    pub fn transport(&self) -> &RecordingTransport {
        self.transport.as_deref().expect("watcher not started")
    }
}
