use serde::{Deserialize, Serialize};

/// Counters describing one piece of text.
///
/// Characters are Unicode scalar values (`char`s), so `"é"` counts as one
/// character whether or not it is stored as two bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub line_count: usize,
}

/// Output of a transform together with the stats of that output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub text: String,
    pub stats: TextStats,
}
