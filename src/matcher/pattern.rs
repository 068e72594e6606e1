//! Pattern validation and matching implementation.

use std::fmt;
use std::str::FromStr;

use crate::crypto::ADDRESS_LEN;

/// Number of symbols an address character can take (A-Z plus 2-7).
pub const ALPHABET_SIZE: u64 = 32;

/// Where the pattern must appear within the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPosition {
    /// Match at the beginning of the address
    #[default]
    Start,
    /// Match at the end of the address
    End,
}

impl FromStr for MatchPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" | "prefix" | "begin" => Ok(MatchPosition::Start),
            "end" | "suffix" => Ok(MatchPosition::End),
            _ => Err(format!("Unknown match position: {}", s)),
        }
    }
}

impl fmt::Display for MatchPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPosition::Start => write!(f, "start"),
            MatchPosition::End => write!(f, "end"),
        }
    }
}

/// Errors produced when a pattern fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern cannot be empty")]
    Empty,
    #[error("pattern `{0}` is longer than an address ({ADDRESS_LEN} characters)")]
    TooLong(String),
    #[error("pattern `{pattern}` contains `{found}`; addresses only use the letters A-Z and digits 2-7")]
    InvalidCharacter { pattern: String, found: char },
}

/// A validated vanity pattern.
///
/// Every character is guaranteed to belong to the base32 address alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    position: MatchPosition,
}

impl Pattern {
    /// Creates a pattern, validating every character against the alphabet.
    pub fn new(text: impl Into<String>, position: MatchPosition) -> Result<Self, PatternError> {
        let text = text.into();

        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        if text.len() > ADDRESS_LEN {
            return Err(PatternError::TooLong(text));
        }
        if let Some(found) = text.chars().find(|&c| !is_alphabet_char(c)) {
            return Err(PatternError::InvalidCharacter {
                pattern: text,
                found,
            });
        }

        Ok(Self { text, position })
    }

    /// Returns the pattern string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the match position.
    pub fn position(&self) -> MatchPosition {
        self.position
    }

    /// Tests an encoded address against this pattern.
    #[inline]
    pub fn matches(&self, address: &str) -> bool {
        match self.position {
            MatchPosition::Start => address.starts_with(&self.text),
            MatchPosition::End => address.ends_with(&self.text),
        }
    }

    /// Returns the expected number of random candidates needed for a match.
    ///
    /// Each address character is one of 32 possibilities, so the expectation
    /// is `32^n` for a pattern of length `n`.
    pub fn expected_attempts(&self) -> u64 {
        ALPHABET_SIZE.saturating_pow(self.text.len() as u32)
    }
}

/// Returns true if the character belongs to the address alphabet.
#[inline]
fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='7').contains(&c)
}
