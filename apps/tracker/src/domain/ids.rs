//! Identifier and clock sources for new players and rounds.

use time::OffsetDateTime;
use ulid::Ulid;

/// Fresh opaque id (ULID, lowercase).
pub fn new_id() -> String {
    Ulid::new().to_string().to_lowercase()
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
