use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Malformed input: {detail}")]
    MalformedInput { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::MalformedInput { .. } => ErrorCode::MalformedInput,
            AppError::Storage { .. } => ErrorCode::StorageError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Helper method to extract error detail from any error variant
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. } => detail,
            AppError::MalformedInput { detail } => detail,
            AppError::Storage { detail } => detail,
            AppError::Config { detail } => detail,
        }
    }

    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation { .. } | AppError::MalformedInput { .. } => 2,
            AppError::Storage { .. } => 3,
            AppError::Config { .. } => 78,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn malformed(detail: String) -> Self {
        Self::MalformedInput { detail }
    }

    pub fn storage(detail: String) -> Self {
        Self::Storage { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let code = e.code();
        match e {
            DomainError::Validation(_, detail) => AppError::invalid(code, detail),
            DomainError::MalformedInput(detail) => AppError::malformed(detail),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage(format!("io error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::malformed(format!("invalid JSON: {e}"))
    }
}
