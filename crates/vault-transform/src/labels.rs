use vault_model::{DigestLength, ProcessingType};

/// Human-readable label for a selector.
///
/// Digest selectors are labelled "SHA-256 (N rounds)" where N is the number
/// of hex characters shown. That wording is kept for compatibility with
/// existing stores and screens; no hashing rounds are involved.
pub fn label(selector: &ProcessingType) -> &'static str {
    match selector {
        ProcessingType::None => "No Processing",
        ProcessingType::Capitalize => "Capitalize Words",
        ProcessingType::Lowercase => "Convert to Lowercase",
        ProcessingType::RemoveWhitespace => "Remove Whitespace",
        ProcessingType::Trim => "Trim",
        ProcessingType::Sha256(DigestLength::Chars10) => "SHA-256 (10 rounds)",
        ProcessingType::Sha256(DigestLength::Chars16) => "SHA-256 (16 rounds)",
        ProcessingType::Sha256(DigestLength::Chars24) => "SHA-256 (24 rounds)",
        ProcessingType::Sha256(DigestLength::Chars32) => "SHA-256 (32 rounds)",
        ProcessingType::Sha256(DigestLength::Chars64) => "SHA-256 (64 rounds)",
        ProcessingType::Unrecognized(_) => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<&str> = ProcessingType::known().iter().map(label).collect();
        assert_eq!(labels.len(), ProcessingType::known().len());
        assert!(!labels.contains("Unknown"));
    }

    #[test]
    fn digest_labels() {
        let short = label(&ProcessingType::Sha256(DigestLength::Chars10));
        let full = label(&ProcessingType::Sha256(DigestLength::Chars64));
        assert!(!short.is_empty());
        assert_ne!(short, full);
    }

    #[test]
    fn unknown_selector() {
        assert_eq!(
            label(&ProcessingType::Unrecognized("reverse".into())),
            "Unknown"
        );
    }
}
