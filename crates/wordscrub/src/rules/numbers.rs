//! # Number Folder

use std::borrow::Cow;

use crate::{
    errors::ScrubResult,
    rules::{
        TextRule,
        patterns::{DECIMAL_PLACEHOLDER_PATTERN, DIGIT_RUN_PATTERN, NUMBER_PLACEHOLDER},
    },
    utility::regex::RegexWrapper,
};

/// Folds digit runs into the [`NUMBER_PLACEHOLDER`].
///
/// Two passes:
/// 1. every run of ASCII digits becomes `N`;
/// 2. a lone decimal `N.N` becomes `N`; a chain of three or more
///    (`N.N.N`, e.g. from a version string) is left untouched.
#[derive(Debug, Clone)]
pub struct NumberFolder {
    digit_runs: RegexWrapper,
    decimal_pair: RegexWrapper,
}

impl NumberFolder {
    /// Compile a new folder.
    pub fn new() -> ScrubResult<Self> {
        Ok(Self {
            digit_runs: DIGIT_RUN_PATTERN.compile()?,
            decimal_pair: DECIMAL_PLACEHOLDER_PATTERN.compile()?,
        })
    }
}

impl TextRule for NumberFolder {
    fn name(&self) -> &'static str {
        "numbers"
    }

    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>> {
        let digits = self.digit_runs.replace_all(text, NUMBER_PLACEHOLDER)?;
        let folded = match self.decimal_pair.replace_all(&digits, NUMBER_PLACEHOLDER)? {
            Cow::Owned(folded) => Some(folded),
            Cow::Borrowed(_) => None,
        };
        Ok(match folded {
            Some(folded) => Cow::Owned(folded),
            None => digits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(text: &str) -> String {
        NumberFolder::new().unwrap().apply(text).unwrap().into_owned()
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(fold("I have 10 cats"), "I have N cats");
        assert_eq!(fold("123abc4"), "NabcN");
        assert_eq!(fold("no digits"), "no digits");
    }

    #[test]
    fn test_decimal_pair_collapses() {
        assert_eq!(fold("value 21.3 ok"), "value N ok");
        assert_eq!(fold("3.14"), "N");
        assert_eq!(fold("from 1.5 to 2.5."), "from N to N.");
    }

    #[test]
    fn test_longer_chains_preserved() {
        assert_eq!(fold("v1.2.3.4"), "vN.N.N.N");
        assert_eq!(fold("1.2.3"), "N.N.N");
    }

    #[test]
    fn test_literal_placeholders_fold_too() {
        // An existing `N.N` is indistinguishable from a folded one.
        assert_eq!(fold("N.N"), "N");
    }

    #[test]
    fn test_borrowed_when_unchanged() {
        let folder = NumberFolder::new().unwrap();
        assert!(matches!(folder.apply("plain").unwrap(), Cow::Borrowed(_)));
    }
}
