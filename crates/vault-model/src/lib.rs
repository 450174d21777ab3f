pub mod entry;
pub mod error;
pub mod ids;
pub mod processing;
pub mod stats;
pub mod timestamp;

pub use entry::TextEntry;
pub use error::{ModelError, Result};
pub use ids::EntryId;
pub use processing::{DigestLength, ProcessingType};
pub use stats::{ProcessingResult, TextStats};
