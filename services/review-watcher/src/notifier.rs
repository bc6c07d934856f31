//! Best-effort chat delivery

use std::sync::Arc;

use async_trait::async_trait;

/// Trait for chat transports that can deliver a text to a chat
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Get the transport type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Deliver `text` to `chat_id`
    async fn send_message(&self, chat_id: &str, text: &str) -> crate::Result<()>;
}

/// Sends messages to one configured chat. Delivery failures are logged, never returned.
pub struct Notifier {
    chat_id: String,
    transport: Arc<dyn ChatTransport>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("chat_id", &self.chat_id)
            .field("transport", &self.transport.type_name())
            .finish()
    }
}

impl Notifier {
    pub fn new(chat_id: impl Into<String>, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            chat_id: chat_id.into(),
            transport,
        }
    }

    /// Try to deliver `message`. Returns whether delivery succeeded.
    pub async fn send(&self, message: &str) -> bool {
        match self.transport.send_message(&self.chat_id, message).await {
            Ok(()) => {
                tracing::info!(
                    "Сообщение отправлено через '{}': {}",
                    self.transport.type_name(),
                    message
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Сервис '{}' недоступен, сообщение не доставлено: {}",
                    self.transport.type_name(),
                    e
                );
                false
            }
        }
    }
}
