//! Where command text comes from.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::logging::redact_value;

/// Text from the positional argument, a file, or stdin, in that order.
///
/// A single trailing line break is dropped from stdin so that
/// `echo hello | text-vault save` stores `hello`.
pub fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    let (text, source) = match (text, file) {
        (Some(text), _) => (text, "argument"),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read text from {}", path.display()))?;
            (text, "file")
        }
        (None, None) => (read_from(std::io::stdin().lock())?, "stdin"),
    };
    tracing::debug!(source, bytes = text.len(), text = %redact_value(&text), "Read input text");
    Ok(text)
}

pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("read text from stdin")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
