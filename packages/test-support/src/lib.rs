//! Test support utilities for generating unique test data
//!
//! This crate provides a ULID-backed helper for unique player names, plus
//! the logging bootstrap shared by unit and integration tests.

use ulid::Ulid;

pub mod logging;

/// Generate a unique, human-looking player name with the given prefix
///
/// The suffix is the last eight characters of a fresh ULID (the random part),
/// so names stay short enough to print in a score sheet while remaining
/// distinct case-insensitively.
///
/// # Examples
/// ```
/// use test_support::unique_name;
///
/// let a = unique_name("Ada");
/// let b = unique_name("Ada");
/// assert_ne!(a.to_lowercase(), b.to_lowercase());
/// assert!(a.starts_with("Ada "));
/// ```
pub fn unique_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    let tail = &ulid[ulid.len() - 8..];
    format!("{prefix} {tail}")
}
