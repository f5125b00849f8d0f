//! # Vocabulary Restrictor

use crate::{
    errors::{ScrubError, ScrubResult},
    rules::{
        DotIsolator,
        DotRestorer,
        PerfectSplitter,
        Sentinel,
        TextRule,
        Token,
        TokenJoiner,
    },
    vocab::{CommonVocab, CoverageReport},
};

/// Sentences rewritten against a [`CommonVocab`], with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedCorpus {
    /// The rewritten sentences; same length and order as the input.
    pub sentences: Vec<String>,

    /// Coverage of the retained vocabulary over the corpus.
    pub report: CoverageReport,
}

/// Check that `marker` survives whitespace tokenization as one token.
pub fn validate_marker(marker: &str) -> ScrubResult<()> {
    let reason = if marker.is_empty() {
        Some("must not be empty")
    } else if marker.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScrubError::InvalidMarker {
            marker: marker.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Rewrites sentences, replacing out-of-vocabulary words with a marker.
///
/// Per sentence:
/// 1. mid-word dots are isolated with the sentinel;
/// 2. the text is perfect-split;
/// 3. punctuation, brackets, and sentinels pass through; a word is kept
///    if its lowercased form is in the vocabulary, else replaced;
/// 4. the tokens are joined, and sentinels restored to dots.
#[derive(Debug, Clone)]
pub struct VocabRestrictor {
    isolator: DotIsolator,
    splitter: PerfectSplitter,
    joiner: TokenJoiner,
    restorer: DotRestorer,
    unk_symbol: String,
}

impl VocabRestrictor {
    /// Build a restrictor.
    ///
    /// ## Arguments
    /// * `sentinel` - the mid-word dot sentinel.
    /// * `unk_symbol` - the unknown-word marker.
    pub fn new(
        sentinel: &Sentinel,
        unk_symbol: &str,
    ) -> ScrubResult<Self> {
        validate_marker(unk_symbol)?;
        Ok(Self {
            isolator: DotIsolator::new(sentinel)?,
            splitter: PerfectSplitter::new(sentinel)?,
            joiner: TokenJoiner::new()?,
            restorer: DotRestorer::new(sentinel),
            unk_symbol: unk_symbol.to_string(),
        })
    }

    /// Rewrite one sentence against `vocab`.
    pub fn rewrite(
        &self,
        sentence: &str,
        vocab: &CommonVocab,
    ) -> ScrubResult<String> {
        let isolated = self.isolator.apply(sentence)?;
        let tokens = self.splitter.split(&isolated)?;

        let kept: Vec<&str> = tokens
            .iter()
            .map(|token| match token {
                Token::Word(word) if !vocab.contains(word) => self.unk_symbol.as_str(),
                token => token.as_str(),
            })
            .collect();

        let joint = self.joiner.join(&kept)?;
        Ok(self.restorer.apply(&joint)?.into_owned())
    }
}
