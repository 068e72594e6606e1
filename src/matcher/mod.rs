//! Pattern matching for Algorand addresses.
//!
//! Supported matching positions:
//! - Start: match at the beginning of the address
//! - End: match at the end of the address

mod pattern;

pub use pattern::{MatchPosition, Pattern, PatternError, ALPHABET_SIZE};
