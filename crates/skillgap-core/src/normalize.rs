//! Text normalization.
//!
//! Reduces arbitrary text to lowercase ASCII alphanumeric runs separated by
//! single spaces. Everything downstream (extraction, matching) assumes this
//! shape, so [`NormalizedText`] can only be produced by [`normalize`].

use std::fmt;

/// Text containing only lowercase ASCII letters, digits, and single spaces.
///
/// A single leading or trailing space survives when the raw input started or
/// ended with whitespace or punctuation. Phrase matching is boundary-based,
/// so those edge spaces never affect results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Borrow the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text has no alphanumeric content at all.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw text for skill extraction.
///
/// Lower-cases every character, replaces anything that is not an ASCII
/// letter or digit with a space, and collapses runs of spaces into one.
#[tracing::instrument(skip_all, fields(input_len = raw.len()))]
pub fn normalize(raw: &str) -> NormalizedText {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with(' ') {
            out.push(' ');
        }
    }

    NormalizedText(out)
}
