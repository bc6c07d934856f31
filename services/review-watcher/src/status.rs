//! Homework record to notification text

use crate::catalog::ReviewStatus;
use crate::response::HomeworkRecord;

/// Placeholder used when a record carries no homework name
pub const UNNAMED_HOMEWORK: &str = "<unnamed>";

/// Describe a homework record as a notification message.
///
/// Missing fields are logged but do not abort extraction. A status that is
/// absent or outside the catalog fails with `UnknownStatus`.
pub fn extract(record: &HomeworkRecord) -> crate::Result<String> {
    if record.name.is_none() {
        tracing::warn!("Нет значения homework_name в записи {:?}", record);
    }
    if record.status.is_none() {
        tracing::warn!("Нет значения status в записи {:?}", record);
    }

    let code = record.status.as_deref().unwrap_or("<missing>");
    let status = ReviewStatus::from_code(code)
        .ok_or_else(|| crate::WatcherError::UnknownStatus(code.to_string()))?;

    let name = record.name.as_deref().unwrap_or(UNNAMED_HOMEWORK);
    Ok(format_message(name, status))
}

/// The fixed notification template
pub fn format_message(name: &str, status: ReviewStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    )
}
