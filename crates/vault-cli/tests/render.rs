//! Integration tests for terminal output and text input.

use chrono::{TimeZone, Utc};
use vault_cli::input::read_from;
use vault_cli::render::{entries_table, stats_table, types_table};
use vault_model::{DigestLength, EntryId, ProcessingType, TextEntry};
use vault_transform::compute_stats;

fn entry(original: &str, selector: ProcessingType) -> TextEntry {
    let at = Utc.with_ymd_and_hms(2024, 3, 29, 10, 15, 0).unwrap();
    TextEntry::new(
        EntryId::new("1a2b3c4d-0000-4000-8000-000000000000").unwrap(),
        original,
        original,
        selector,
        at,
    )
}

#[test]
fn test_stats_table_shows_counts() {
    let rendered = stats_table(&compute_stats("hello brave\nworld")).to_string();

    assert!(rendered.contains("Words"));
    assert!(rendered.contains("Lines"));
    assert!(rendered.contains("17"));
    assert!(rendered.contains("15"));
}

#[test]
fn test_entries_table_uses_short_id_and_title() {
    let entries = vec![entry(
        "A fairly long note about the weekly planning meeting",
        ProcessingType::Sha256(DigestLength::Chars10),
    )];

    let rendered = entries_table(&entries, 10).to_string();

    assert!(rendered.contains("1a2b3c4d"));
    assert!(!rendered.contains("1a2b3c4d-0000"));
    assert!(rendered.contains("A fairly l..."));
    assert!(rendered.contains("SHA-256 (10 rounds)"));
}

#[test]
fn test_entries_table_flags_unrecognized_type() {
    let entries = vec![entry("note", ProcessingType::Unrecognized("rot13".into()))];

    let rendered = entries_table(&entries, 30).to_string();

    assert!(rendered.contains("rot13"));
}

#[test]
fn test_types_table_lists_every_selector() {
    let rendered = types_table().to_string();

    for selector in ProcessingType::known() {
        assert!(rendered.contains(selector.as_str()), "{selector}");
    }
}

#[test]
fn test_read_from_strips_one_line_break() {
    assert_eq!(read_from("hello\n".as_bytes()).unwrap(), "hello");
    assert_eq!(read_from("hello\r\n".as_bytes()).unwrap(), "hello");
    assert_eq!(read_from("hello\n\n".as_bytes()).unwrap(), "hello\n");
    assert_eq!(read_from("  hello  ".as_bytes()).unwrap(), "  hello  ");
}
