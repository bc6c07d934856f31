//! Change detection for status messages and failures

/// Remembers the last emitted message and the last reported failure.
///
/// Both channels hold a single slot: a value is new when it differs from
/// the one immediately before it, so `[A, A, A]` emits once while
/// `[A, B, A]` emits three times.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_message: Option<String>,
    last_error: Option<String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records `message` if it differs from the last one emitted
    pub fn should_emit(&mut self, message: &str) -> bool {
        if self.last_message.as_deref() == Some(message) {
            return false;
        }
        self.last_message = Some(message.to_string());
        true
    }

    /// Returns true and records the failure if its text differs from the last one reported
    pub fn should_report(&mut self, error: &crate::WatcherError) -> bool {
        let signature = error.to_string();
        if self.last_error.as_deref() == Some(signature.as_str()) {
            return false;
        }
        self.last_error = Some(signature);
        true
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
