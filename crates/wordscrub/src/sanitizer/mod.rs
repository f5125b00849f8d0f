//! # Sentence Sanitizer
//!
//! ## Example
//!
//! ```rust
//! use wordscrub::{Pipeline, SanitizerOptions};
//!
//! let sanitizer = SanitizerOptions::default().build().unwrap();
//!
//! assert_eq!(
//!     sanitizer.sanitize(Pipeline::Hard, "Hello, World! 123").unwrap(),
//!     "hello world "
//! );
//!
//! let corpus = ["the cat sat", "the dog sat", "a cat ran"];
//! let restricted = sanitizer.restrict_vocabulary(&corpus, 2).unwrap();
//! assert_eq!(restricted.sentences[1], "the <unk> <unk>");
//! ```

mod sanitizer_impl;
mod sanitizer_options;

#[doc(inline)]
pub use sanitizer_impl::*;
#[doc(inline)]
pub use sanitizer_options::*;
