use std::cell::{Cell, RefCell};

use crate::error::AppError;
use crate::store::SessionStore;

/// In-process store. Can be told to fail saves, to exercise the best-effort
/// persistence path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::default();
        store.blob.replace(Some(blob.into()));
        store
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), AppError> {
        if self.fail_saves.get() {
            return Err(AppError::storage("quota exceeded".to_string()));
        }
        self.blob.replace(Some(blob.to_string()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
