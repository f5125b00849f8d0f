use wordscrub::{Pipeline, Sanitizer};

use crate::{
    input_output::{InputArgs, OutputArgs, write_lines},
    logging::LogArgs,
    pipeline_args::PipelineArgs,
};

/// Args for the sanitize command.
#[derive(clap::Args, Debug)]
pub struct SanitizeArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl SanitizeArgs {
    /// Run the sanitize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let sanitizer = self.pipeline.build_sanitizer()?;
        let sentences = self.input.read_sentences()?;

        let sanitized = run_sanitize(&sanitizer, self.pipeline.pipeline, &sentences)?;

        let mut writer = self.output.open_writer()?;
        write_lines(&mut writer, &sanitized)?;

        Ok(())
    }
}

fn run_sanitize(
    sanitizer: &Sanitizer,
    pipeline: Pipeline,
    sentences: &[String],
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    log::info!("sanitizing {} sentences with {pipeline}", sentences.len());
    Ok(sanitizer.sanitize_batch(pipeline, sentences)?)
}

#[cfg(test)]
mod tests {
    use wordscrub::SanitizerOptions;

    use super::*;

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_sanitize() {
        let sanitizer = SanitizerOptions::default()
            .with_n_most_common(2)
            .build()
            .unwrap();
        let corpus = lines(&["Cats like 10 fish.", "Dogs like 2 bones."]);

        assert_eq!(
            run_sanitize(&sanitizer, Pipeline::Numbers, &corpus).unwrap(),
            vec!["Cats like N fish.", "Dogs like N bones."]
        );
        assert_eq!(
            run_sanitize(&sanitizer, Pipeline::Hard, &corpus).unwrap(),
            vec!["cats like fish ", "dogs like bones "]
        );
        assert_eq!(
            run_sanitize(&sanitizer, Pipeline::NumbersLimitCommonWords, &corpus).unwrap(),
            vec!["<unk> like N <unk>.", "<unk> like N <unk>."]
        );
    }
}
