use std::env;

use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "TRACKER_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Read `TRACKER_LOG_FORMAT` (`text` or `json`, case-insensitive). Unset
/// means text; an empty value is an error.
pub fn log_format() -> Result<LogFormat, AppError> {
    match env::var(LOG_FORMAT_VAR) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'text' or 'json', got '{other}'"
            ))),
        },
        Err(env::VarError::NotPresent) => Ok(LogFormat::Text),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "{LOG_FORMAT_VAR} is not valid unicode"
        ))),
    }
}
