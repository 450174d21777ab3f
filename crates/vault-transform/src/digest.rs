#![deny(unsafe_code)]

use sha2::Digest;
use vault_model::DigestLength;

/// Full lowercase-hex SHA-256 of `bytes` (64 characters).
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// First `length` hex characters of the SHA-256 of the UTF-8 bytes of `text`.
///
/// The digest itself is never weakened; only the displayed prefix changes.
pub fn truncated_digest(text: &str, length: DigestLength) -> String {
    let mut hex = sha256_hex(text.as_bytes());
    hex.truncate(length.chars());
    hex
}
