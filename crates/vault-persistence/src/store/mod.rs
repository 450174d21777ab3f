//! Key-value storage backends.
//!
//! The entry repository only needs a durable string-to-string map. This
//! module provides:
//! - [`FileStore`]: one JSON file per key, written atomically
//! - [`MemoryStore`]: an in-process map for previews and tests

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Durable string-to-string map.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
