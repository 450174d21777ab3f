//! Persistent storage for Text Vault entries.
//!
//! Saved entries are kept as a single JSON array under one storage key
//! (the namespace, `text-vault-entries` by default), mirroring a browser
//! local-storage layout so existing data can be carried over file by file.
//!
//! # Features
//!
//! - **Pluggable storage** behind the [`KeyValueStore`] trait
//! - **Atomic writes** in [`FileStore`] to prevent data corruption
//! - **Fail-soft listing**: unreadable data lists as empty, while writes
//!   refuse to overwrite it
//! - **Injected clock** so timestamps can be pinned in tests
//!
//! # Record format
//!
//! ```text
//! [
//!   {
//!     "id": "5b0c3f9e-...",
//!     "originalText": "hello world",
//!     "processedText": "Hello World",
//!     "processingType": "capitalize",
//!     "createdAt": "2024-03-29T10:15:00.250Z",
//!     "updatedAt": "2024-03-29T10:15:00.250Z"
//!   }
//! ]
//! ```
//!
//! # Example
//!
//! ```
//! use vault_model::ProcessingType;
//! use vault_persistence::{EntryRepository, MemoryStore};
//!
//! let mut repo = EntryRepository::new(MemoryStore::new());
//! let entry = repo.save("hello world", ProcessingType::Capitalize)?;
//! assert_eq!(entry.processed_text(), "Hello World");
//! assert_eq!(repo.list().len(), 1);
//! # Ok::<(), vault_persistence::PersistenceError>(())
//! ```

mod clock;
mod error;
mod repository;
mod store;

pub use clock::{Clock, SystemClock};
pub use error::{PersistenceError, Result};
pub use repository::{DEFAULT_NAMESPACE, EntryRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
