//! # Whitespace Normalizer

use std::borrow::Cow;

use crate::{
    errors::ScrubResult,
    rules::{TextRule, patterns::WHITESPACE_RUN_PATTERN},
    utility::regex::RegexWrapper,
};

/// Collapses every run of whitespace into a single space.
///
/// Leading and trailing runs become a single space; nothing is trimmed.
#[derive(Debug, Clone)]
pub struct WhitespaceNormalizer {
    regex: RegexWrapper,
}

impl WhitespaceNormalizer {
    /// Compile a new normalizer.
    pub fn new() -> ScrubResult<Self> {
        Ok(Self {
            regex: WHITESPACE_RUN_PATTERN.compile()?,
        })
    }
}

impl TextRule for WhitespaceNormalizer {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        Ok(self.regex.replace_all(text, " ")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        let rule = WhitespaceNormalizer::new().unwrap();
        assert_eq!(rule.apply("a   b\t\tc\nd").unwrap(), "a b c d");
        assert_eq!(rule.apply("  padded  ").unwrap(), " padded ");
        assert_eq!(rule.apply("\u{a0}nbsp").unwrap(), " nbsp");
        assert_eq!(rule.apply("").unwrap(), "");
    }

    #[test]
    fn test_single_spaces_untouched() {
        let rule = WhitespaceNormalizer::new().unwrap();
        // a lone space is still a run; the text is unchanged either way.
        assert_eq!(rule.apply("a b").unwrap(), "a b");
        assert!(matches!(rule.apply("ab").unwrap(), Cow::Borrowed(_)));
    }
}
