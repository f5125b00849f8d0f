use wordscrub::{Pipeline, Sanitizer};

use crate::{
    input_output::{InputArgs, OutputArgs, write_lines},
    logging::LogArgs,
    pipeline_args::PipelineArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let sanitizer = self.pipeline.build_sanitizer()?;
        let sentences = self.input.read_sentences()?;

        let tokenized = run_tokenize(&sanitizer, self.pipeline.pipeline, &sentences)?;

        let mut writer = self.output.open_writer()?;
        write_lines(&mut writer, &tokenized)?;

        Ok(())
    }
}

/// Tokens of each sentence, separated by single spaces.
fn run_tokenize(
    sanitizer: &Sanitizer,
    pipeline: Pipeline,
    sentences: &[String],
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    Ok(sanitizer
        .sanitize_and_tokenize_batch(sentences, pipeline)?
        .iter()
        .map(|tokens| tokens.join(" "))
        .collect())
}
