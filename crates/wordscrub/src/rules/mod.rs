//! # Sanitizer Rules
//!
//! The primitive text transformations the pipelines are composed of.
//!
//! Sentence-level rules implement [`TextRule`]:
//! * [`CharFilter`] - keep letters, dashes, and spaces.
//! * [`WhitespaceNormalizer`] - collapse whitespace runs.
//! * [`CaseNormalizer`] - lowercase.
//! * [`NumberFolder`] - fold digit runs to `N`.
//! * [`DotIsolator`] / [`DotRestorer`] - protect mid-word dots with a [`Sentinel`].
//!
//! Token-level rules:
//! * [`PerfectSplitter`] - split into [`Token`]s.
//! * [`TokenJoiner`] - join tokens, re-attaching punctuation.

mod case;
mod char_filter;
mod dots;
mod join;
mod numbers;
pub mod patterns;
mod sentinel;
mod split;
mod text_rule;
mod whitespace;

#[doc(inline)]
pub use case::*;
#[doc(inline)]
pub use char_filter::*;
#[doc(inline)]
pub use dots::*;
#[doc(inline)]
pub use join::*;
#[doc(inline)]
pub use numbers::*;
#[doc(inline)]
pub use sentinel::*;
#[doc(inline)]
pub use split::*;
#[doc(inline)]
pub use text_rule::*;
#[doc(inline)]
pub use whitespace::*;
