//! Processing selectors.
//!
//! A [`ProcessingType`] picks the transform applied to a piece of text. It is
//! used both as a dispatch key by the transform engine and as a persisted
//! field on every saved entry, where it is stored by its canonical name
//! (`"none"`, `"capitalize"`, `"sha256-16"`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Name written by older stores for the full-length digest.
const LEGACY_SHA256: &str = "SHA-256";

/// Number of leading hex characters kept from a SHA-256 digest.
///
/// The full digest is always computed; this only controls how much of it is
/// shown. User-facing labels call these lengths "rounds", which is a naming
/// carry-over and has nothing to do with the cipher's round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigestLength {
    Chars10,
    Chars16,
    Chars24,
    Chars32,
    Chars64,
}

impl DigestLength {
    pub const ALL: [DigestLength; 5] = [
        DigestLength::Chars10,
        DigestLength::Chars16,
        DigestLength::Chars24,
        DigestLength::Chars32,
        DigestLength::Chars64,
    ];

    /// Hex characters retained.
    pub const fn chars(self) -> usize {
        match self {
            DigestLength::Chars10 => 10,
            DigestLength::Chars16 => 16,
            DigestLength::Chars24 => 24,
            DigestLength::Chars32 => 32,
            DigestLength::Chars64 => 64,
        }
    }

    pub fn from_chars(chars: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|len| len.chars() == chars)
    }

    fn name(self) -> &'static str {
        match self {
            DigestLength::Chars10 => "sha256-10",
            DigestLength::Chars16 => "sha256-16",
            DigestLength::Chars24 => "sha256-24",
            DigestLength::Chars32 => "sha256-32",
            DigestLength::Chars64 => "sha256-64",
        }
    }
}

/// Transform selector.
///
/// `Unrecognized` holds a persisted name this build does not know about. It
/// is kept verbatim so the entry round-trips unchanged, and the engine treats
/// it exactly like [`ProcessingType::None`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProcessingType {
    #[default]
    None,
    Capitalize,
    Lowercase,
    RemoveWhitespace,
    Trim,
    Sha256(DigestLength),
    Unrecognized(String),
}

impl ProcessingType {
    /// Every selector a user can choose, in display order.
    pub fn known() -> [ProcessingType; 10] {
        [
            ProcessingType::None,
            ProcessingType::Capitalize,
            ProcessingType::Lowercase,
            ProcessingType::RemoveWhitespace,
            ProcessingType::Trim,
            ProcessingType::Sha256(DigestLength::Chars10),
            ProcessingType::Sha256(DigestLength::Chars16),
            ProcessingType::Sha256(DigestLength::Chars24),
            ProcessingType::Sha256(DigestLength::Chars32),
            ProcessingType::Sha256(DigestLength::Chars64),
        ]
    }

    /// Canonical persisted name.
    pub fn as_str(&self) -> &str {
        match self {
            ProcessingType::None => "none",
            ProcessingType::Capitalize => "capitalize",
            ProcessingType::Lowercase => "lowercase",
            ProcessingType::RemoveWhitespace => "remove-whitespace",
            ProcessingType::Trim => "trim",
            ProcessingType::Sha256(len) => len.name(),
            ProcessingType::Unrecognized(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProcessingType::Unrecognized(_))
    }

    /// Parse a persisted name, keeping unknown names as `Unrecognized`.
    pub fn parse_lenient(value: &str) -> Self {
        Self::parse_known(value)
            .unwrap_or_else(|| ProcessingType::Unrecognized(value.to_string()))
    }

    fn parse_known(value: &str) -> Option<Self> {
        let parsed = match value {
            "none" => ProcessingType::None,
            "capitalize" => ProcessingType::Capitalize,
            "lowercase" => ProcessingType::Lowercase,
            "remove-whitespace" => ProcessingType::RemoveWhitespace,
            "trim" => ProcessingType::Trim,
            LEGACY_SHA256 => ProcessingType::Sha256(DigestLength::Chars64),
            other => {
                let chars = other.strip_prefix("sha256-")?.parse().ok()?;
                ProcessingType::Sha256(DigestLength::from_chars(chars)?)
            }
        };
        Some(parsed)
    }
}

impl fmt::Display for ProcessingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingType {
    type Err = ModelError;

    /// Strict parse for user input: unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_known(s.trim()).ok_or_else(|| ModelError::InvalidProcessingType(s.to_string()))
    }
}

impl serde::Serialize for ProcessingType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ProcessingType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}
