#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;

pub use domain::{
    append_round, current_hand_size, hand_size_for, parse_document, pyramid_sequence, reconcile,
    score_round, snapshot, undo_round, DealingMode, RoundStamp, SessionSnapshot, SessionState,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::Session;
pub use store::{FileStore, MemoryStore, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
