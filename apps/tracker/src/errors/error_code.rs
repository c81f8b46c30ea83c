//! Error codes for the score tracker.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and are what the CLI prints
//! in front of a failure message.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round validation
    /// Fewer than two players registered
    NotEnoughPlayers,
    /// Hand size for the upcoming round cannot be determined
    HandSizeUndetermined,
    /// A player is missing a bid or tricks value
    MissingEntry,
    /// Bid or tricks value out of range for the hand size
    EntryOutOfRange,

    // Roster validation
    /// Player name is blank
    InvalidPlayerName,
    /// Player name already in use
    DuplicatePlayerName,
    /// Roster is frozen because rounds exist
    RosterLocked,
    /// General validation error
    ValidationError,

    // Import
    /// Import document is not valid JSON or not an object
    MalformedInput,

    // System Errors
    /// Reading or writing the state blob failed
    StorageError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::HandSizeUndetermined => "HAND_SIZE_UNDETERMINED",
            Self::MissingEntry => "MISSING_ENTRY",
            Self::EntryOutOfRange => "ENTRY_OUT_OF_RANGE",

            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            Self::RosterLocked => "ROSTER_LOCKED",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::MalformedInput => "MALFORMED_INPUT",

            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: [ErrorCode; 11] = [
        Self::NotEnoughPlayers,
        Self::HandSizeUndetermined,
        Self::MissingEntry,
        Self::EntryOutOfRange,
        Self::InvalidPlayerName,
        Self::DuplicatePlayerName,
        Self::RosterLocked,
        Self::ValidationError,
        Self::MalformedInput,
        Self::StorageError,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
