//! # Word Counter

use core::cmp::Reverse;

use crate::types::{ScrubHashMap, WordCount, hash_map_with_capacity};

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Expected number of distinct words.
    /// Used when pre-allocating the table.
    pub expected_distinct: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            expected_distinct: 10_000,
        }
    }
}

impl WordCounterOptions {
    /// Set the expected number of distinct words.
    pub fn with_expected_distinct(
        self,
        expected_distinct: usize,
    ) -> Self {
        Self { expected_distinct }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordEntry {
    count: WordCount,
    first_seen: usize,
}

/// Corpus-wide word frequency table.
///
/// Words are the whitespace-separated pieces of each sample; the counter
/// does no normalization of its own. Each distinct word remembers when it
/// was first seen, which breaks ties in [`WordCounter::most_common`].
#[derive(Debug, Clone)]
pub struct WordCounter {
    /// The config options.
    pub options: WordCounterOptions,

    word_counts: ScrubHashMap<String, WordEntry>,
    total: WordCount,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let word_counts = hash_map_with_capacity(options.expected_distinct);
        Self {
            options,
            word_counts,
            total: 0,
        }
    }

    /// Count one occurrence of `word`.
    pub fn add_word(
        &mut self,
        word: &str,
    ) {
        self.total += 1;
        if let Some(entry) = self.word_counts.get_mut(word) {
            entry.count += 1;
            return;
        }
        let first_seen = self.word_counts.len();
        self.word_counts.insert(
            word.to_string(),
            WordEntry {
                count: 1,
                first_seen,
            },
        );
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in text.as_ref().split_whitespace() {
            self.add_word(word);
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// The number of occurrences of `word`.
    pub fn count(
        &self,
        word: &str,
    ) -> WordCount {
        self.word_counts.get(word).map_or(0, |e| e.count)
    }

    /// The total number of word occurrences counted.
    pub fn total_count(&self) -> WordCount {
        self.total
    }

    /// The number of distinct words counted.
    pub fn distinct_count(&self) -> usize {
        self.word_counts.len()
    }

    /// The `n` most frequent words, most frequent first.
    ///
    /// Equal counts are ordered by first appearance in the corpus,
    /// earliest first; so the cut at rank `n` is deterministic.
    pub fn most_common(
        &self,
        n: usize,
    ) -> Vec<(&str, WordCount)> {
        let mut ranked: Vec<(&str, WordEntry)> = self
            .word_counts
            .iter()
            .map(|(word, entry)| (word.as_str(), *entry))
            .collect();
        ranked.sort_unstable_by_key(|(_, entry)| (Reverse(entry.count), entry.first_seen));
        ranked.truncate(n);

        ranked
            .into_iter()
            .map(|(word, entry)| (word, entry.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc = WordCounter::default();

        let samples = vec!["Hello world", "Foo  world bar world "];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.total_count(), 6);
        assert_eq!(wc.distinct_count(), 4);
        assert_eq!(wc.count("world"), 3);
        assert_eq!(wc.count("missing"), 0);

        assert_eq!(
            wc.most_common(10),
            vec![("world", 3), ("Hello", 1), ("Foo", 1), ("bar", 1)]
        );
    }

    #[test]
    fn test_most_common_tie_break() {
        let mut wc = WordCounter::new(WordCounterOptions::default().with_expected_distinct(8));
        wc.update_from_samples(["the cat sat", "the dog sat", "a cat ran"]);

        assert_eq!(
            wc.most_common(4),
            vec![("the", 2), ("cat", 2), ("sat", 2), ("dog", 1)]
        );
        assert_eq!(wc.most_common(2), vec![("the", 2), ("cat", 2)]);
        assert!(wc.most_common(0).is_empty());
        assert_eq!(wc.most_common(100).len(), 6);
    }

    #[test]
    fn test_empty() {
        let wc = WordCounter::default();
        assert_eq!(wc.total_count(), 0);
        assert_eq!(wc.distinct_count(), 0);
        assert!(wc.most_common(10).is_empty());
    }
}
