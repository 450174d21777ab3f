//! Transform dispatch.

use vault_model::{ProcessingResult, ProcessingType};

use crate::digest::truncated_digest;
use crate::stats::compute_stats;

/// Apply `selector` to the whole of `text`.
///
/// Total over all inputs: an unrecognized selector passes the text through
/// unchanged. The returned stats always describe the processed text.
pub fn apply(text: &str, selector: &ProcessingType) -> ProcessingResult {
    let processed = transform(text, selector);
    let stats = compute_stats(&processed);
    tracing::trace!(
        selector = %selector,
        input_bytes = text.len(),
        output_chars = stats.char_count,
        "applied transform"
    );
    ProcessingResult {
        text: processed,
        stats,
    }
}

/// Processed text only, without statistics.
pub fn transform(text: &str, selector: &ProcessingType) -> String {
    match selector {
        ProcessingType::None | ProcessingType::Unrecognized(_) => text.to_string(),
        ProcessingType::Capitalize => capitalize_words(text),
        ProcessingType::Lowercase => text.to_lowercase(),
        ProcessingType::RemoveWhitespace => remove_whitespace(text),
        ProcessingType::Trim => text.trim().to_string(),
        ProcessingType::Sha256(length) => truncated_digest(text, *length),
    }
}

/// Uppercase the first character of every token between single spaces.
///
/// Only `' '` separates tokens: a word after a tab or newline keeps its case.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
