//! Test subscriber shared by the tracker's unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Checked in order; the first non-blank value is used as the filter.
pub const LEVEL_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];

const QUIET: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

fn directive() -> String {
    LEVEL_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| QUIET.to_string())
}

/// Install the test-writer subscriber once per process. An unparsable filter
/// falls back to `warn`; a subscriber installed elsewhere wins silently.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_new(directive()).unwrap_or_else(|_| EnvFilter::new(QUIET));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
