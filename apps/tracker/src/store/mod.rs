//! Persistence collaborators for the session blob.
//!
//! The engine only ever hands a store one opaque JSON document to keep, and
//! asks for it back at startup.

pub mod file;
pub mod memory;

use crate::error::AppError;

pub use file::FileStore;
pub use memory::MemoryStore;

pub trait SessionStore {
    /// The last saved blob, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Replace the saved blob.
    fn save(&self, blob: &str) -> Result<(), AppError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Result<Option<String>, AppError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), AppError> {
        (**self).save(blob)
    }
}
