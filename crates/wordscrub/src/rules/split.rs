//! # Perfect Split
//!
//! Splits text into words, single punctuation / bracket characters, and
//! sentinels; everything else (notably spaces) is dropped.

use crate::{
    errors::ScrubResult,
    rules::{
        Sentinel,
        patterns::{BRACKETS_OPENING, PUNCTUATION, WORD_OR_SYMBOL_PATTERN},
    },
    utility::regex::{RegexPattern, RegexWrapper},
};

/// A token of the perfect split, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A run of word characters, apostrophes, or dashes.
    Word(&'a str),

    /// A single closing-style punctuation character.
    Punctuation(&'a str),

    /// A single opening bracket character.
    OpeningBracket(&'a str),

    /// The mid-word dot sentinel.
    Sentinel(&'a str),
}

impl<'a> Token<'a> {
    /// The token text.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Word(s) | Self::Punctuation(s) | Self::OpeningBracket(s) | Self::Sentinel(s) => s,
        }
    }

    /// Is this a [`Token::Word`]?
    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The perfect-split tokenizer.
#[derive(Debug, Clone)]
pub struct PerfectSplitter {
    regex: RegexWrapper,
    sentinel: Sentinel,
}

impl PerfectSplitter {
    /// Compile a splitter which recognizes `sentinel`.
    pub fn new(sentinel: &Sentinel) -> ScrubResult<Self> {
        let pattern = format!(
            "{}|{}",
            WORD_OR_SYMBOL_PATTERN,
            regex::escape(sentinel.as_str())
        );
        Ok(Self {
            regex: RegexPattern::Basic(pattern).compile()?,
            sentinel: sentinel.clone(),
        })
    }

    /// The sentinel this splitter recognizes.
    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    /// Split `text` into tokens, left to right.
    pub fn split<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Vec<Token<'h>>> {
        let mut tokens = Vec::new();
        for piece in self.regex.find_iter(text) {
            tokens.push(self.classify(piece?));
        }
        Ok(tokens)
    }

    fn classify<'h>(
        &self,
        piece: &'h str,
    ) -> Token<'h> {
        if piece == self.sentinel.as_str() {
            return Token::Sentinel(piece);
        }
        let mut chars = piece.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if PUNCTUATION.contains(&c) => Token::Punctuation(piece),
            (Some(c), None) if BRACKETS_OPENING.contains(&c) => Token::OpeningBracket(piece),
            _ => Token::Word(piece),
        }
    }
}
