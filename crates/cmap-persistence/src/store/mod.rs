//! Raw key/value storage backends.
//!
//! A store only moves strings; typing and fallback policy live in
//! `document.rs`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Durable storage addressed by a small, fixed set of keys.
pub trait StateStore: Send + Sync {
    /// Read the raw document under `key`. `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the raw document under `key`.
    fn write(&self, key: &str, contents: &str) -> Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        (**self).write(key, contents)
    }
}
