mod pipelines;
mod sanitize;
mod tokenize;
mod vocab;

/// Subcommands for wordscrub
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Sanitize sentences, one per line.
    Sanitize(sanitize::SanitizeArgs),

    /// Sanitize sentences, then write their whitespace-separated tokens.
    Tokenize(tokenize::TokenizeArgs),

    /// Write the most common words of a corpus, with their counts.
    ///
    /// Numbers are folded first, as in the `numbers-limit-commonwords` pipeline.
    Vocab(vocab::VocabArgs),

    /// List available pipelines.
    #[clap(visible_alias = "ls")]
    Pipelines(pipelines::PipelinesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Sanitize(cmd) => cmd.run(),
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Pipelines(cmd) => cmd.run(),
        }
    }
}
