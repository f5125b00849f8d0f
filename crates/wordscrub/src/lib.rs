//! # `wordscrub` Sentence Sanitizer
//!
//! Rule-based cleanup of natural-language sentences ahead of model
//! training or tokenization.
//!
//! Three named [`Pipeline`]s are provided:
//! * `hard` - keep letters and dashes, collapse whitespace, lowercase.
//! * `numbers` - collapse whitespace, fold every number to `N`.
//! * `numbers-limit-commonwords` - `numbers`, then replace every word outside
//!   the corpus' N most common words with `<unk>`.
//!
//! See:
//! * [`SanitizerOptions`] to configure and build a [`Sanitizer`].
//! * [`rules`] for the primitive text transformations.
//! * [`vocab`] for word counting and vocabulary restriction.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::Scrub{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``.
//! If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism using the ``rayon`` crate;
//! see [`SanitizerOptions::parallel`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use wordscrub::{Pipeline, SanitizerOptions};
//!
//! let sanitizer = SanitizerOptions::default()
//!     .with_n_most_common(2)
//!     .build()
//!     .unwrap();
//!
//! let corpus = ["Cats like 10 fish.", "Dogs like 2 bones."];
//! let out = sanitizer
//!     .sanitize_batch(Pipeline::NumbersLimitCommonWords, &corpus)
//!     .unwrap();
//!
//! assert_eq!(out, vec!["<unk> like N <unk>.", "<unk> like N <unk>."]);
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod pipeline;
pub mod rules;
pub mod sanitizer;
pub mod types;
pub mod utility;
pub mod vocab;

#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use pipeline::Pipeline;
#[doc(inline)]
pub use sanitizer::*;
