use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,

    /// Strip surrounding whitespace from every input line.
    #[clap(long)]
    pub trim: bool,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read every input line as one sentence.
    pub fn read_sentences(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut reader = self.open_reader()?;
        let sentences = read_sentences(&mut reader, self.trim)?;
        log::debug!("read {} sentences", sentences.len());
        Ok(sentences)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read `reader` to the end, one sentence per line.
///
/// Line terminators (`\n`, `\r\n`) are always removed.
pub fn read_sentences(
    reader: &mut dyn BufRead,
    trim: bool,
) -> std::io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|line| {
                if trim {
                    line.trim().to_string()
                } else {
                    line
                }
            })
        })
        .collect()
}

/// Write each line followed by a newline, then flush.
pub fn write_lines<S: AsRef<str>>(
    writer: &mut dyn Write,
    lines: &[S],
) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}
