//! Error types for the review watcher

/// Errors that can occur in the review watcher
#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("API практикума недоступно: {0}")]
    ApiUnavailable(String),

    #[error("Ошибка преобразования json: {0}")]
    ResponseDecode(String),

    #[error("Неверное значение статуса: {0}")]
    UnknownStatus(String),

    #[error("Отсутствует переменная окружения: {}", .0.join(", "))]
    MissingConfiguration(Vec<String>),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for watcher operations
pub type Result<T> = std::result::Result<T, WatcherError>;
