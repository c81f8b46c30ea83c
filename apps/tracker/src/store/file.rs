use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::AppError;
use crate::store::SessionStore;

/// Keeps the blob in a single JSON file.
///
/// Saves write a temporary file next to the target and rename it into place
/// while holding an exclusive lock on `<file>.lock`, so the previous blob
/// survives any failed write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn lock_path(&self) -> Result<PathBuf, AppError> {
        let name = self.path.file_name().ok_or_else(|| {
            AppError::storage(format!("{} is not a file path", self.path.display()))
        })?;
        let mut lock_name = OsString::from(name);
        lock_name.push(".lock");
        Ok(self.path.with_file_name(lock_name))
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, blob: &str) -> Result<(), AppError> {
        let lock_path = self.lock_path()?;
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(blob.as_bytes())?;
        staged.as_file().sync_all()?;

        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;
        lock.lock_exclusive()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "state saved");
        Ok(())
    }
}
