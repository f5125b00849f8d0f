//! # Pipeline Selection

use crate::errors::{ScrubError, ScrubResult};

/// The named sanitization pipelines.
///
/// Parses from the canonical names (`hard`, `numbers`,
/// `numbers-limit-commonwords`) and from the legacy method names
/// (`sanitize_hard`, ...). Displays as the canonical name.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
pub enum Pipeline {
    /// Character filter, whitespace normalizer, then lowercase.
    #[default]
    #[strum(to_string = "hard", serialize = "sanitize_hard")]
    Hard,

    /// Whitespace normalizer, then number folding.
    #[strum(to_string = "numbers", serialize = "sanitize_numbers")]
    Numbers,

    /// [`Pipeline::Numbers`] on every sentence, then corpus-wide
    /// vocabulary restriction.
    #[strum(
        to_string = "numbers-limit-commonwords",
        serialize = "sanitize_numbers_limit_commonwords"
    )]
    NumbersLimitCommonWords,
}

impl Pipeline {
    /// Resolve a pipeline by name.
    pub fn from_name(name: &str) -> ScrubResult<Self> {
        name.parse().map_err(|_| ScrubError::UnknownPipeline {
            name: name.to_string(),
        })
    }

    /// Does this pipeline need the whole corpus at once?
    pub fn is_corpus_wide(&self) -> bool {
        matches!(self, Self::NumbersLimitCommonWords)
    }

    /// A one-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hard => "keep letters and dashes, collapse whitespace, lowercase",
            Self::Numbers => "collapse whitespace, fold numbers to N",
            Self::NumbersLimitCommonWords => {
                "numbers, then replace words outside the N most common with <unk>"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Pipeline::from_name("hard").unwrap(), Pipeline::Hard);
        assert_eq!(Pipeline::from_name("numbers").unwrap(), Pipeline::Numbers);
        assert_eq!(
            Pipeline::from_name("numbers-limit-commonwords").unwrap(),
            Pipeline::NumbersLimitCommonWords
        );

        assert_eq!(Pipeline::from_name("sanitize_hard").unwrap(), Pipeline::Hard);
        assert_eq!(
            Pipeline::from_name("sanitize_numbers").unwrap(),
            Pipeline::Numbers
        );
        assert_eq!(
            Pipeline::from_name("sanitize_numbers_limit_commonwords").unwrap(),
            Pipeline::NumbersLimitCommonWords
        );
    }

    #[test]
    fn test_unknown() {
        match Pipeline::from_name("soft") {
            Err(ScrubError::UnknownPipeline { name }) => assert_eq!(name, "soft"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trip() {
        for pipeline in Pipeline::iter() {
            let name = pipeline.to_string();
            assert_eq!(Pipeline::from_name(&name).unwrap(), pipeline);
            assert!(!pipeline.description().is_empty());
        }
        assert_eq!(Pipeline::default().to_string(), "hard");
    }

    #[test]
    fn test_corpus_wide() {
        assert!(!Pipeline::Hard.is_corpus_wide());
        assert!(!Pipeline::Numbers.is_corpus_wide());
        assert!(Pipeline::NumbersLimitCommonWords.is_corpus_wide());
    }
}
