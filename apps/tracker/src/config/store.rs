use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// File the session is kept in when neither `--state` nor the environment
/// name one.
pub const DEFAULT_STATE_FILE: &str = "wizard.tracker.v1.json";

pub const STATE_PATH_VAR: &str = "TRACKER_STATE_PATH";

/// Resolve the state file location.
///
/// An explicit path wins over `TRACKER_STATE_PATH`, which wins over
/// [`DEFAULT_STATE_FILE`] in the working directory.
pub fn state_path(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        return non_empty(path, "--state");
    }
    match env::var(STATE_PATH_VAR) {
        Ok(value) => non_empty(PathBuf::from(value), STATE_PATH_VAR),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(DEFAULT_STATE_FILE)),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "{STATE_PATH_VAR} is not valid unicode"
        ))),
    }
}

fn non_empty(path: PathBuf, source: &str) -> Result<PathBuf, AppError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(AppError::config(format!("{source} must not be empty")));
    }
    Ok(path)
}
