//! # Error Types

use crate::utility::regex::ErrorWrapper;

/// Errors from wordscrub operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    /// A rule pattern failed to compile, or failed while matching.
    ///
    /// The backtracking engine used by the lookaround rules may fail
    /// at match time (e.g. backtrack limit); the linear engine never does.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// The pipeline name does not select any known pipeline.
    #[error("unknown pipeline: {name:?}")]
    UnknownPipeline {
        /// The name that failed to resolve.
        name: String,
    },

    /// The sentinel could not round-trip through the splitter and joiner.
    #[error("invalid sentinel {sentinel:?}: {reason}")]
    InvalidSentinel {
        /// The rejected sentinel.
        sentinel: String,

        /// Why it was rejected.
        reason: &'static str,
    },

    /// The unknown-word marker would not survive whitespace tokenization.
    #[error("invalid marker {marker:?}: {reason}")]
    InvalidMarker {
        /// The rejected marker.
        marker: String,

        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Result type for wordscrub operations.
pub type ScrubResult<T> = core::result::Result<T, ScrubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ScrubError::UnknownPipeline {
            name: "soft".to_string(),
        };
        assert_eq!(err.to_string(), "unknown pipeline: \"soft\"");

        let err = ScrubError::InvalidSentinel {
            sentinel: "PUNKT".to_string(),
            reason: "must not start with a word character",
        };
        assert_eq!(
            err.to_string(),
            "invalid sentinel \"PUNKT\": must not start with a word character"
        );
    }
}
