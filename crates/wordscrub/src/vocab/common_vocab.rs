//! # Common Vocabulary

use crate::{
    types::{ScrubHashSet, hash_set_with_capacity},
    vocab::{CoverageReport, WordCounter},
};

/// The retained top-N words of a corpus.
///
/// Built once per corpus from a fully populated [`WordCounter`], and
/// passed explicitly to the rewrite pass.
#[derive(Debug, Clone)]
pub struct CommonVocab {
    words: ScrubHashSet<String>,
    report: CoverageReport,
}

impl CommonVocab {
    /// Retain the `n_most_common` words of `counter`.
    ///
    /// See [`WordCounter::most_common`] for the tie-break at rank `n`.
    pub fn from_counter(
        counter: &WordCounter,
        n_most_common: usize,
    ) -> Self {
        let ranked = counter.most_common(n_most_common);

        let mut words = hash_set_with_capacity(ranked.len());
        let mut covered_count = 0;
        for (word, count) in ranked {
            covered_count += count;
            words.insert(word.to_string());
        }

        let report = CoverageReport {
            covered_count,
            total_count: counter.total_count(),
            retained_words: words.len(),
            distinct_words: counter.distinct_count(),
        };

        Self { words, report }
    }

    /// Is the lowercased form of `word` retained?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// The number of retained words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The coverage diagnostics for this vocabulary.
    pub fn report(&self) -> &CoverageReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> WordCounter {
        let mut wc = WordCounter::default();
        wc.update_from_samples(["the cat sat", "the dog sat", "a cat ran"]);
        wc
    }

    #[test]
    fn test_from_counter() {
        let vocab = CommonVocab::from_counter(&counter(), 2);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("the"));
        assert!(vocab.contains("The"));
        assert!(vocab.contains("CAT"));
        assert!(!vocab.contains("sat"));
        assert!(!vocab.contains("dog"));

        assert_eq!(
            vocab.report(),
            &CoverageReport {
                covered_count: 4,
                total_count: 9,
                retained_words: 2,
                distinct_words: 6,
            }
        );
    }

    #[test]
    fn test_cap_exceeds_distinct() {
        let vocab = CommonVocab::from_counter(&counter(), 100);
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.report().covered_count, 9);
        assert_eq!(vocab.report().dictionary_percent(), 100.0);
    }

    #[test]
    fn test_zero_cap() {
        let vocab = CommonVocab::from_counter(&counter(), 0);
        assert!(vocab.is_empty());
        assert!(!vocab.contains("the"));
        assert_eq!(vocab.report().covered_count, 0);
    }
}
