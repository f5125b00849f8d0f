//! # Mid-Word Dot Sentinel

use core::fmt::{Display, Formatter};

use crate::{
    errors::{ScrubError, ScrubResult},
    rules::patterns::{DEFAULT_SENTINEL, SENTINEL_EDGE_PATTERN, is_symbol_char},
};

/// The reserved marker standing in for a mid-word dot.
///
/// Input text must not contain the sentinel; occurrences in the input
/// are indistinguishable from isolated dots.
///
/// A sentinel must survive [`crate::rules::PerfectSplitter`] as a single
/// token and pass through [`crate::rules::TokenJoiner`] untouched:
/// * it is non-empty and contains no whitespace;
/// * its first and last characters are not word characters,
///   apostrophes, or dashes;
/// * it contains no punctuation or opening bracket character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentinel(String);

impl Default for Sentinel {
    fn default() -> Self {
        Self(DEFAULT_SENTINEL.to_string())
    }
}

impl Display for Sentinel {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Sentinel {
    /// Validate and wrap a sentinel.
    pub fn new<S: Into<String>>(sentinel: S) -> ScrubResult<Self> {
        let sentinel = sentinel.into();

        let reason = if sentinel.is_empty() {
            Some("must not be empty")
        } else if sentinel.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else if sentinel.chars().any(is_symbol_char) {
            Some("must not contain punctuation or bracket characters")
        } else if SENTINEL_EDGE_PATTERN
            .compile()?
            .find_iter(&sentinel)
            .next()
            .transpose()?
            .is_some()
        {
            Some("must not start or end with a word character, apostrophe, or dash")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScrubError::InvalidSentinel { sentinel, reason }),
            None => Ok(Self(sentinel)),
        }
    }

    /// The sentinel text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
