//! # Character Filter

use std::borrow::Cow;

use crate::{
    errors::ScrubResult,
    rules::{TextRule, patterns::CHAR_FILTER_PATTERN},
    utility::regex::RegexWrapper,
};

/// Replaces every character other than a letter, a dash, or a space with a space.
///
/// Digits and underscores are replaced too. Runs of replaced characters
/// become runs of spaces; see [`crate::rules::WhitespaceNormalizer`].
#[derive(Debug, Clone)]
pub struct CharFilter {
    regex: RegexWrapper,
}

impl CharFilter {
    /// Compile a new filter.
    pub fn new() -> ScrubResult<Self> {
        Ok(Self {
            regex: CHAR_FILTER_PATTERN.compile()?,
        })
    }
}

impl TextRule for CharFilter {
    fn name(&self) -> &'static str {
        "char-filter"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        Ok(self.regex.replace_all(text, " ")?)
    }
}
