//! Domain-level error type used by the engine and the session service.
//!
//! This error type is storage- and presentation-agnostic. The session layer
//! returns `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Which precondition a rejected edit violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Fewer than two players registered.
    NotEnoughPlayers,
    /// No hand size for the upcoming round (manual mode unset, or pyramid finished).
    HandSizeUndetermined,
    /// A registered player has no bid or no tricks recorded.
    MissingEntry,
    /// Negative value, or more than the round's hand size.
    EntryOutOfRange,
    /// Blank player name.
    InvalidPlayerName,
    /// Name already taken (case-insensitive).
    DuplicatePlayerName,
    /// Roster edit attempted after the first round.
    RosterLocked,
    Other,
}

impl ValidationKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
            Self::HandSizeUndetermined => ErrorCode::HandSizeUndetermined,
            Self::MissingEntry => ErrorCode::MissingEntry,
            Self::EntryOutOfRange => ErrorCode::EntryOutOfRange,
            Self::InvalidPlayerName => ErrorCode::InvalidPlayerName,
            Self::DuplicatePlayerName => ErrorCode::DuplicatePlayerName,
            Self::RosterLocked => ErrorCode::RosterLocked,
            Self::Other => ErrorCode::ValidationError,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Live user input rejected; state left unchanged.
    Validation(ValidationKind, String),
    /// Imported document unparsable or not an object; nothing imported.
    MalformedInput(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, d) => write!(f, "validation error: {d}"),
            DomainError::MalformedInput(d) => write!(f, "malformed input: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput(detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => kind.code(),
            DomainError::MalformedInput(_) => ErrorCode::MalformedInput,
        }
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::MalformedInput(_) => None,
        }
    }
}
