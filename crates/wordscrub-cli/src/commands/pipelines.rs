use std::io::Write;

use strum::IntoEnumIterator;
use wordscrub::Pipeline;

/// Args for the pipeline listing command.
#[derive(clap::Args, Debug)]
pub struct PipelinesArgs {}

impl PipelinesArgs {
    /// Run the pipeline listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        write_listing(&mut std::io::stdout().lock())?;
        Ok(())
    }
}

fn write_listing(writer: &mut dyn Write) -> std::io::Result<()> {
    for pipeline in Pipeline::iter() {
        writeln!(writer, "\"{pipeline}\" - {}", pipeline.description())?;
    }
    Ok(())
}
