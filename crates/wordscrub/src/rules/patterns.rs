//! # Rule Patterns
//!
//! The character classes and regex patterns shared by the sanitizer rules.

use crate::{join_patterns, utility::regex::ConstRegexPattern};

/// Closing-style punctuation; kept as single-character tokens.
///
/// The joiner removes the space *before* these.
pub const PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', ')', ']'];

/// Opening brackets; kept as single-character tokens.
///
/// The joiner removes the space *after* these.
pub const BRACKETS_OPENING: [char; 2] = ['(', '['];

/// The placeholder every digit run is folded into.
pub const NUMBER_PLACEHOLDER: &str = "N";

/// The default mid-word dot sentinel.
pub const DEFAULT_SENTINEL: &str = "<PUNKT>";

/// The default unknown-word marker.
pub const DEFAULT_UNK_SYMBOL: &str = "<unk>";

/// Everything except letters, dashes, and spaces; digits and underscores
/// are listed separately because `\w` admits them.
pub const CHAR_FILTER_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"[^\w \-]|\d|_");

/// A maximal run of whitespace.
pub const WHITESPACE_RUN_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"\s+");

/// A maximal run of ASCII digits.
pub const DIGIT_RUN_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"[0-9]+");

/// Exactly two dot-joined placeholders; longer chains (`N.N.N`) are not matched.
pub const DECIMAL_PLACEHOLDER_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Fancy(r"(?<!N\.)N\.N(?!\.N)");

/// A dot directly followed by a word character.
pub const MID_WORD_DOT_PATTERN: ConstRegexPattern = ConstRegexPattern::Basic(r"(\.)(\w)");

/// Word runs, or a single punctuation / opening bracket character.
///
/// The sentinel branch is appended at runtime; see [`crate::rules::PerfectSplitter`].
pub const WORD_OR_SYMBOL_PATTERN: &str = join_patterns!(r"[\w'-]+", r"[.,!?;:)\]\(\[]");

/// A space before closing punctuation which is followed by a space, or ends the text.
pub const SPACE_BEFORE_CLOSING_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"\s([.,!?;:)\]](?:\s|$))");

/// An opening bracket followed by a space, or ending the text.
pub const SPACE_AFTER_OPENING_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"([\(\[])(?:\s|$)");

/// Sentinels whose edge characters would fuse with a neighbouring word run.
pub const SENTINEL_EDGE_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"^[\w'-]|[\w'-]$");

/// Is `c` one of the [`PUNCTUATION`] or [`BRACKETS_OPENING`] characters?
pub fn is_symbol_char(c: char) -> bool {
    PUNCTUATION.contains(&c) || BRACKETS_OPENING.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::regex::RegexPattern;

    #[test]
    fn test_patterns_compile() {
        assert!(CHAR_FILTER_PATTERN.compile().unwrap().is_basic());
        assert!(WHITESPACE_RUN_PATTERN.compile().unwrap().is_basic());
        assert!(DIGIT_RUN_PATTERN.compile().unwrap().is_basic());
        assert!(DECIMAL_PLACEHOLDER_PATTERN.compile().unwrap().is_fancy());
        assert!(MID_WORD_DOT_PATTERN.compile().unwrap().is_basic());
        assert!(SPACE_BEFORE_CLOSING_PATTERN.compile().unwrap().is_basic());
        assert!(SPACE_AFTER_OPENING_PATTERN.compile().unwrap().is_basic());
        assert!(SENTINEL_EDGE_PATTERN.compile().unwrap().is_basic());

        let split = RegexPattern::Basic(WORD_OR_SYMBOL_PATTERN.to_string());
        assert!(split.compile().is_ok());
    }

    #[test]
    fn test_symbol_classes_agree() {
        let split = RegexPattern::Basic(WORD_OR_SYMBOL_PATTERN.to_string())
            .compile()
            .unwrap();

        for c in PUNCTUATION.iter().chain(BRACKETS_OPENING.iter()) {
            let text = c.to_string();
            let found: Vec<&str> = split.find_iter(&text).map(|m| m.unwrap()).collect();
            assert_eq!(found, vec![text.as_str()], "{c:?}");
            assert!(is_symbol_char(*c));
        }
        assert!(!is_symbol_char('-'));
        assert!(!is_symbol_char('\''));
    }
}
