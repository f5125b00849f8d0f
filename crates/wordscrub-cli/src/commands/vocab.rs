use std::io::Write;

use wordscrub::{Pipeline, Sanitizer, vocab::CommonVocab};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Number of words to keep.
    #[arg(long, default_value_t = wordscrub::DEFAULT_N_MOST_COMMON)]
    n_most_common: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let sanitizer = wordscrub::SanitizerOptions::default().build()?;
        let sentences = self.input.read_sentences()?;

        let mut writer = self.output.open_writer()?;
        let vocab = write_vocab(&mut writer, &sanitizer, &sentences, self.n_most_common)?;

        for line in vocab.report().to_string().lines() {
            log::info!("{line}");
        }

        Ok(())
    }
}

/// Write the top words as `word<TAB>count`, most common first.
///
/// This is the vocabulary the `numbers-limit-commonwords` pipeline keeps:
/// numbers are folded before counting, so they are listed as `n`.
fn write_vocab(
    writer: &mut dyn Write,
    sanitizer: &Sanitizer,
    sentences: &[String],
    n_most_common: usize,
) -> Result<CommonVocab, Box<dyn std::error::Error>> {
    let numbered = sanitizer.sanitize_batch(Pipeline::Numbers, sentences)?;
    let counter = sanitizer.count_words(&numbered)?;

    for (word, count) in counter.most_common(n_most_common) {
        writeln!(writer, "{word}\t{count}")?;
    }
    writer.flush()?;

    Ok(CommonVocab::from_counter(&counter, n_most_common))
}
