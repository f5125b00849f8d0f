//! # Vocabulary Restriction
//!
//! A two pass, corpus-wide algorithm:
//! 1. [`WordCounter`] builds the frequency table over the whole corpus;
//!    [`CommonVocab`] retains its top-N words.
//! 2. [`VocabRestrictor`] rewrites every sentence against that vocabulary.
//!
//! The table must be complete before any sentence is rewritten.

mod common_vocab;
mod coverage;
mod restrictor;
mod word_counter;

#[doc(inline)]
pub use common_vocab::*;
#[doc(inline)]
pub use coverage::*;
#[doc(inline)]
pub use restrictor::*;
#[doc(inline)]
pub use word_counter::*;
