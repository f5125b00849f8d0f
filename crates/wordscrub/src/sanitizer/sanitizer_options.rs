//! # Sanitizer Options

use std::sync::Arc;

use crate::{
    Sanitizer,
    errors::ScrubResult,
    rules::patterns::{DEFAULT_SENTINEL, DEFAULT_UNK_SYMBOL},
};

/// The default vocabulary cap.
pub const DEFAULT_N_MOST_COMMON: usize = 10_000;

/// Options for configuring a [`Sanitizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizerOptions {
    /// The mid-word dot sentinel.
    ///
    /// See [`crate::rules::Sentinel`] for the constraints.
    pub sentinel: String,

    /// The unknown-word marker.
    pub unk_symbol: String,

    /// The vocabulary cap used by [`Sanitizer::sanitize`] and
    /// [`Sanitizer::sanitize_batch`] for corpus-wide pipelines.
    pub n_most_common: usize,

    /// Log coverage diagnostics for corpus-wide pipelines.
    pub verbose: bool,

    /// Request threaded batch processing.
    ///
    /// Only has an effect with the "rayon" feature.
    pub parallel: bool,
}

impl Default for SanitizerOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            unk_symbol: DEFAULT_UNK_SYMBOL.to_string(),
            n_most_common: DEFAULT_N_MOST_COMMON,
            verbose: false,
            parallel: false,
        }
    }
}

impl SanitizerOptions {
    /// Sets the mid-word dot sentinel.
    pub fn with_sentinel<S: Into<String>>(
        mut self,
        sentinel: S,
    ) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Sets the unknown-word marker.
    pub fn with_unk_symbol<S: Into<String>>(
        mut self,
        unk_symbol: S,
    ) -> Self {
        self.unk_symbol = unk_symbol.into();
        self
    }

    /// Sets the vocabulary cap.
    pub fn with_n_most_common(
        mut self,
        n_most_common: usize,
    ) -> Self {
        self.n_most_common = n_most_common;
        self
    }

    /// Sets the configured verbosity.
    pub fn with_verbose(
        mut self,
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Validate the options and compile a [`Sanitizer`].
    pub fn build(&self) -> ScrubResult<Arc<Sanitizer>> {
        Ok(Sanitizer::new(self.clone())?.into())
    }
}
