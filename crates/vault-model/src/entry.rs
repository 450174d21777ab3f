//! Persisted text entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EntryId;
use crate::processing::ProcessingType;

/// A saved (original, processed) text pair.
///
/// The id, the original text and the creation time are fixed once the entry
/// exists; only the processed text, the selector and the update time change
/// on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    id: EntryId,
    original_text: String,
    processed_text: String,
    processing_type: ProcessingType,
    #[serde(with = "crate::timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    updated_at: DateTime<Utc>,
}

impl TextEntry {
    /// Create an entry whose creation and update times are both `at`.
    pub fn new(
        id: EntryId,
        original_text: impl Into<String>,
        processed_text: impl Into<String>,
        processing_type: ProcessingType,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_text: original_text.into(),
            processed_text: processed_text.into(),
            processing_type,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn processed_text(&self) -> &str {
        &self.processed_text
    }

    pub fn processing_type(&self) -> &ProcessingType {
        &self.processing_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the processed text and selector.
    pub fn revise(
        &mut self,
        processed_text: impl Into<String>,
        processing_type: ProcessingType,
        at: DateTime<Utc>,
    ) {
        self.processed_text = processed_text.into();
        self.processing_type = processing_type;
        self.updated_at = at;
    }

    pub fn was_edited(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Short display title: the first `max_chars` characters of the original
    /// text, with `...` appended when it was cut.
    pub fn title(&self, max_chars: usize) -> String {
        match self.original_text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &self.original_text[..idx]),
            None => self.original_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DigestLength;
    use chrono::{Duration, TimeZone};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 29, 10, 15, 0).unwrap()
    }

    fn sample() -> TextEntry {
        TextEntry::new(
            EntryId::new("3f0c2a4e-entry").unwrap(),
            "Test Entry",
            "Test Entry",
            ProcessingType::Capitalize,
            fixed_time(),
        )
    }

    #[test]
    fn persisted_shape() {
        insta::assert_json_snapshot!(sample(), @r#"
        {
          "id": "3f0c2a4e-entry",
          "originalText": "Test Entry",
          "processedText": "Test Entry",
          "processingType": "capitalize",
          "createdAt": "2024-03-29T10:15:00.000Z",
          "updatedAt": "2024-03-29T10:15:00.000Z"
        }
        "#);
    }

    #[test]
    fn reads_records_written_by_older_stores() {
        let json = r#"{
            "id": "lz3k9x0q8f1m2n",
            "originalText": "hello",
            "processedText": "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            "processingType": "SHA-256",
            "createdAt": "2024-01-02T03:04:05.678Z",
            "updatedAt": "2024-01-02T03:04:05.678Z"
        }"#;
        let entry: TextEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.processing_type(),
            &ProcessingType::Sha256(DigestLength::Chars64)
        );
        assert_eq!(entry.created_at(), entry.updated_at());
        assert!(!entry.was_edited());
    }

    #[test]
    fn revise_keeps_original_and_creation_time() {
        let mut entry = sample();
        let later = fixed_time() + Duration::minutes(5);
        entry.revise(
            "6445c84d258592",
            ProcessingType::Sha256(DigestLength::Chars16),
            later,
        );

        assert_eq!(entry.original_text(), "Test Entry");
        assert_eq!(entry.created_at(), fixed_time());
        assert_eq!(entry.updated_at(), later);
        assert!(entry.was_edited());
    }

    #[test]
    fn title_truncates_on_characters() {
        let entry = TextEntry::new(
            EntryId::generate(),
            "ñandú ñandú ñandú ñandú ñandú ñandú",
            "",
            ProcessingType::None,
            fixed_time(),
        );
        assert_eq!(entry.title(5), "ñandú...");
        assert_eq!(sample().title(30), "Test Entry");
        assert_eq!(sample().title(10), "Test Entry");
    }
}
