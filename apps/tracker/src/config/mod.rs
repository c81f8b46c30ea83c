pub mod logging;
pub mod store;

pub use logging::{log_format, LogFormat};
pub use store::state_path;
