//! Error handling for the score tracker.

pub mod domain;
pub mod error_code;


pub use domain::{DomainError, ValidationKind};
pub use error_code::ErrorCode;
