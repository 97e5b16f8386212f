//! The key-value seam between the planner and its backing store.
//!
//! Values are whole JSON documents. There is no transaction across keys;
//! the last write to a key wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

pub(crate) use file::write_atomic;

use crate::error::StoreError;

pub trait KeyValueStore {
    /// Read a document. `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace a document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the write does not complete.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
