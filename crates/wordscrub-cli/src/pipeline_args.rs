use std::sync::Arc;

use wordscrub::{DEFAULT_N_MOST_COMMON, Pipeline, Sanitizer, SanitizerOptions};

/// Pipeline selection arg group.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// The pipeline to run; see the `pipelines` command.
    #[arg(long, default_value = "hard", value_parser = Pipeline::from_name)]
    pub pipeline: Pipeline,

    /// Vocabulary cap for the `numbers-limit-commonwords` pipeline.
    #[arg(long, default_value_t = DEFAULT_N_MOST_COMMON)]
    pub n_most_common: usize,

    /// Log the vocabulary coverage report.
    #[arg(long)]
    pub coverage: bool,

    /// Process the batch on multiple threads.
    #[arg(long)]
    pub parallel: bool,
}

impl PipelineArgs {
    /// Build the configured sanitizer.
    pub fn build_sanitizer(&self) -> Result<Arc<Sanitizer>, Box<dyn std::error::Error>> {
        Ok(SanitizerOptions::default()
            .with_n_most_common(self.n_most_common)
            .with_verbose(self.coverage)
            .with_parallel(self.parallel)
            .build()?)
    }
}
