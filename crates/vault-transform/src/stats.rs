//! Text statistics.
//!
//! All counters share one definition of a character (a Unicode scalar
//! value) and one definition of whitespace (`char::is_whitespace`, the
//! Unicode `White_Space` property).

use vault_model::TextStats;

/// Compute word, character and line counts for `text`.
///
/// - words: non-empty tokens between whitespace runs
/// - lines: one more than the number of `'\n'` characters, so `""` has one
///   line and a trailing newline opens an empty last line
pub fn compute_stats(text: &str) -> TextStats {
    let mut char_count = 0;
    let mut char_count_no_spaces = 0;
    let mut newlines = 0;
    for ch in text.chars() {
        char_count += 1;
        if ch == '\n' {
            newlines += 1;
        }
        if !ch.is_whitespace() {
            char_count_no_spaces += 1;
        }
    }

    TextStats {
        word_count: text.split_whitespace().count(),
        char_count,
        char_count_no_spaces,
        line_count: newlines + 1,
    }
}
