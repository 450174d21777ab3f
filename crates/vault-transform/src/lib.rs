//! Text transform engine.
//!
//! Maps `(text, selector)` to the processed text and its statistics. Every
//! function here is pure: no I/O, no clock, no shared state, so callers may
//! recompute a preview on every keystroke from any thread.
//!
//! ```
//! use vault_model::ProcessingType;
//! use vault_transform::{apply, label};
//!
//! let result = apply("hello world", &ProcessingType::Capitalize);
//! assert_eq!(result.text, "Hello World");
//! assert_eq!(result.stats.word_count, 2);
//! assert_eq!(label(&ProcessingType::Capitalize), "Capitalize Words");
//! ```

pub mod digest;
pub mod engine;
pub mod labels;
pub mod stats;

pub use digest::{sha256_hex, truncated_digest};
pub use engine::{apply, transform};
pub use labels::label;
pub use stats::compute_stats;
