//! # Regex Utilities
//!
//! Most sanitizer rules are plain regular expressions, and run on the
//! standard [`regex`] crate. The number-folding rule needs lookaround,
//! which is provided by the [`fancy_regex`] crate; but naturally, this has
//! performance costs, so it is only used where a pattern requires it.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports ``find_iter()`` and ``replace_all()``;
//! both surface match-time failures of the fancy engine as [`ErrorWrapper`].
//! Fancy patterns are compiled with [`FANCY_BACKTRACK_LIMIT`], so in practice
//! they do not fail on long input.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
