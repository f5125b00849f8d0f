//! # Punctuation Isolator / Restorer
//!
//! Dots directly followed by a word character (`3.5`, `e.g`, `www.site`)
//! are not sentence punctuation. The [`DotIsolator`] swaps them for the
//! [`Sentinel`] before splitting; the [`DotRestorer`] swaps them back after
//! joining.

use std::borrow::Cow;

use crate::{
    errors::ScrubResult,
    rules::{Sentinel, TextRule, patterns::MID_WORD_DOT_PATTERN},
    utility::regex::RegexWrapper,
};

/// Replaces each dot followed by a word character with the sentinel.
///
/// Dots before whitespace, punctuation, or the end of the text are left alone.
#[derive(Debug, Clone)]
pub struct DotIsolator {
    regex: RegexWrapper,
    replacement: String,
}

impl DotIsolator {
    /// Compile an isolator for `sentinel`.
    pub fn new(sentinel: &Sentinel) -> ScrubResult<Self> {
        Ok(Self {
            regex: MID_WORD_DOT_PATTERN.compile()?,
            replacement: format!("{}${{2}}", sentinel.as_str().replace('$', "$$")),
        })
    }
}

impl TextRule for DotIsolator {
    fn name(&self) -> &'static str {
        "isolate-dots"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        Ok(self.regex.replace_all(text, &self.replacement)?)
    }
}

/// Replaces `" <sentinel> "` with a literal dot.
///
/// Only sentinels with exactly one space on each side are restored;
/// this is the shape [`crate::rules::TokenJoiner`] produces for a sentinel
/// between two words.
#[derive(Debug, Clone)]
pub struct DotRestorer {
    spaced: String,
}

impl DotRestorer {
    /// Build a restorer for `sentinel`.
    pub fn new(sentinel: &Sentinel) -> Self {
        Self {
            spaced: format!(" {} ", sentinel.as_str()),
        }
    }
}

impl TextRule for DotRestorer {
    fn name(&self) -> &'static str {
        "restore-dots"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        if text.contains(&self.spaced) {
            Ok(Cow::Owned(text.replace(&self.spaced, ".")))
        } else {
            Ok(Cow::Borrowed(text))
        }
    }
}
