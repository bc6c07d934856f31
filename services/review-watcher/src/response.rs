//! Shape validation of homework API responses
//!
//! Validation is lenient: a body that does not look like
//! `{"current_date": <int>, "homeworks": [...]}` yields an empty homework
//! list instead of an error, so a malformed payload never stops polling.

use serde_json::Value;

/// One homework entry as reported by the API. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("homework_name"),
            status: field("status"),
        }
    }
}

/// The parts of a response the watcher cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    pub current_date: Option<i64>,
    pub homeworks: Vec<HomeworkRecord>,
}

/// Extract the homework list and server timestamp from a decoded body
pub fn parse(body: &Value) -> ParsedResponse {
    let Some(object) = body.as_object() else {
        tracing::error!("Получен неправильный результат: ответ API не является словарём");
        return ParsedResponse::default();
    };

    let current_date = object.get("current_date").and_then(Value::as_i64);
    match current_date {
        Some(date) => tracing::info!("Дата проверки API Практикум.Домашка {}", date),
        None => tracing::error!("В ответе API отсутствует current_date"),
    }

    let homeworks = match object.get("homeworks") {
        Some(Value::Array(items)) => {
            tracing::info!("Получен список от API Практикум.Домашка");
            items.iter().map(HomeworkRecord::from_value).collect()
        }
        Some(other) => {
            tracing::error!("Поле homeworks не является списком: {}", other);
            Vec::new()
        }
        None => {
            tracing::error!("В ответе API отсутствует homeworks");
            Vec::new()
        }
    };

    ParsedResponse {
        current_date,
        homeworks,
    }
}
