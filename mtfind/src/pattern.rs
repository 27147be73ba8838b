use std::fmt;

use crate::errors::{MtfindResult, SearchError};

/// The single-character wildcard byte. A `?` in a pattern matches any one
/// byte of the haystack at that position.
pub const WILDCARD: u8 = b'?';

/// A validated literal search pattern.
///
/// Patterns are raw byte sequences of length >= 1; matching is not
/// Unicode-aware. The only metacharacter is [`WILDCARD`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Creates a pattern from raw bytes, rejecting the empty pattern.
    pub fn new(bytes: impl Into<Vec<u8>>) -> MtfindResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SearchError::invalid_pattern("pattern must not be empty"));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
