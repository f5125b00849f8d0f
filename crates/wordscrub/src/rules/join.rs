//! # Token Joiner

use crate::{
    errors::ScrubResult,
    rules::patterns::{SPACE_AFTER_OPENING_PATTERN, SPACE_BEFORE_CLOSING_PATTERN},
    utility::regex::RegexWrapper,
};

/// Joins tokens with single spaces, then re-attaches punctuation.
///
/// * `word , word` becomes `word, word`;
/// * `( word` becomes `(word`.
///
/// Joining the perfect split of spacing-normalized text recovers that text.
#[derive(Debug, Clone)]
pub struct TokenJoiner {
    closing: RegexWrapper,
    opening: RegexWrapper,
}

impl TokenJoiner {
    /// Compile a new joiner.
    pub fn new() -> ScrubResult<Self> {
        Ok(Self {
            closing: SPACE_BEFORE_CLOSING_PATTERN.compile()?,
            opening: SPACE_AFTER_OPENING_PATTERN.compile()?,
        })
    }

    /// Join `tokens` into a single string.
    pub fn join<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> ScrubResult<String> {
        let mut joint = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                joint.push(' ');
            }
            joint.push_str(token.as_ref());
        }

        let closed = self.closing.replace_all(&joint, "${1}")?;
        let opened = self.opening.replace_all(&closed, "${1}")?;
        Ok(opened.into_owned())
    }
}
