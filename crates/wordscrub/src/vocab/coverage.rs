//! # Coverage Diagnostics

use core::fmt::{Display, Formatter};

use crate::types::WordCount;

/// How much of a corpus a retained vocabulary covers.
///
/// Read-only diagnostics; they never affect the rewritten sentences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoverageReport {
    /// Word occurrences whose word was retained.
    pub covered_count: WordCount,

    /// All word occurrences.
    pub total_count: WordCount,

    /// Distinct words retained.
    pub retained_words: usize,

    /// All distinct words.
    pub distinct_words: usize,
}

fn percent(
    part: f64,
    whole: f64,
) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}

impl CoverageReport {
    /// Percentage of word occurrences covered by the retained vocabulary.
    ///
    /// `0.0` for an empty corpus.
    pub fn coverage_percent(&self) -> f64 {
        percent(self.covered_count as f64, self.total_count as f64)
    }

    /// Percentage of distinct words retained.
    ///
    /// `0.0` for an empty corpus.
    pub fn dictionary_percent(&self) -> f64 {
        percent(self.retained_words as f64, self.distinct_words as f64)
    }
}

impl Display for CoverageReport {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        writeln!(
            f,
            "Coverage from most common words {}/{} ({:.2}%)",
            self.covered_count,
            self.total_count,
            self.coverage_percent()
        )?;
        write!(
            f,
            "Dictionary size reduced from {} => {} ({:.2}%)",
            self.distinct_words,
            self.retained_words,
            self.dictionary_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages() {
        let report = CoverageReport {
            covered_count: 6,
            total_count: 9,
            retained_words: 2,
            distinct_words: 6,
        };
        assert!((report.coverage_percent() - 66.666_666).abs() < 1e-3);
        assert!((report.dictionary_percent() - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn test_empty_corpus() {
        let report = CoverageReport::default();
        assert_eq!(report.coverage_percent(), 0.0);
        assert_eq!(report.dictionary_percent(), 0.0);
    }

    #[test]
    fn test_display() {
        let report = CoverageReport {
            covered_count: 4,
            total_count: 9,
            retained_words: 2,
            distinct_words: 6,
        };
        assert_eq!(
            report.to_string(),
            "Coverage from most common words 4/9 (44.44%)\n\
             Dictionary size reduced from 6 => 2 (33.33%)"
        );
    }
}
