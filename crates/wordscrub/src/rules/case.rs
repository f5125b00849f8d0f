//! # Case Normalizer

use std::borrow::Cow;

use crate::{errors::ScrubResult, rules::TextRule};

/// Lowercases text, using the locale-invariant Unicode mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseNormalizer;

impl TextRule for CaseNormalizer {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        Ok(Cow::Owned(text.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(CaseNormalizer.apply("Hello WORLD").unwrap(), "hello world");
        assert_eq!(CaseNormalizer.apply("\u{c9}T\u{c9}").unwrap(), "\u{e9}t\u{e9}");
        assert_eq!(CaseNormalizer.apply("N-1").unwrap(), "n-1");
    }
}
