pub mod reader;
pub mod report;
pub mod runtime;

use clap::Parser;
use std::fmt::{self, Debug};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, instrument};

use reader::Lines;
use report::OutputFormat;
use runtime::{CaseFold, Runtime, WordCountRuntime, WordCounts, WordFilter};

pub const USAGE: &str = "Usage: wcount [filename]";

#[derive(Debug, Error)]
pub enum WcountError {
    #[error("missing input file argument")]
    MissingArgument,

    #[error("failed to open '{}'", path.display())]
    InputOpenFailure { path: PathBuf, source: io::Error },

    #[error("failed to read '{}'", path.display())]
    InputReadFailure { path: PathBuf, source: io::Error },

    #[error("failed to create '{}'", path.display())]
    OutputCreateFailure { path: PathBuf, source: io::Error },

    #[error("failed to write '{}'", path.display())]
    OutputWriteFailure { path: PathBuf, source: io::Error },
}

#[derive(Debug, Parser)]
#[command(name = "wcount")]
#[command(about = "Count word frequencies in a text file and write a ranked report")]
#[command(author, version)]
pub struct Cli {
    /// Input text file. The report is written to the output directory as
    /// `<name>.wcount.<ext>`.
    filename: Option<PathBuf>,

    /// Directory the report is written to.
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// How words are case-folded before counting.
    #[arg(long = "case", default_value_t = CaseFold::Capitalize)]
    case: CaseFold,

    /// Which single-character tokens are counted as words.
    #[arg(long = "filter", default_value_t = WordFilter::SingleChar)]
    filter: WordFilter,

    /// Report format.
    #[arg(long = "format", default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Summary {
    pub output: PathBuf,
    pub distinct: usize,
    pub total: u64,
    /// Time spent reading and counting the input.
    pub elapsed: Duration,
}

impl Summary {
    /// Timing line printed after a run.
    pub fn timing(&self) -> String {
        let micros = self.elapsed.as_micros();
        format!(
            "Time ellapsed: {} us | {:.3} ms",
            micros,
            micros as f64 * 0.001
        )
    }
}

pub struct Wcount<R: Runtime> {
    input: PathBuf,
    output_dir: PathBuf,
    format: OutputFormat,
    runtime: R,
}

impl Wcount<WordCountRuntime> {
    /// Create a new Wcount instance from CLI arguments
    pub fn from_cli(cli: Cli) -> Result<Self, WcountError> {
        let input = cli.filename.ok_or(WcountError::MissingArgument)?;
        Ok(Wcount {
            input,
            output_dir: cli.output_dir,
            format: cli.format,
            runtime: WordCountRuntime::new(cli.case, cli.filter),
        })
    }
}

impl<R: Runtime> Wcount<R> {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, runtime: R) -> Self {
        Wcount {
            input: input.into(),
            output_dir: output_dir.into(),
            format: OutputFormat::default(),
            runtime,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        report::output_path(&self.input, &self.output_dir)
    }

    /// Read the whole input, then write the ranked report.
    #[instrument(skip(self), fields(input = %self.input.display()))]
    pub fn run(&self) -> Result<Summary, WcountError> {
        debug!("Running wcount");
        let started = Instant::now();

        let lines = Lines::open(&self.input).map_err(|source| WcountError::InputOpenFailure {
            path: self.input.clone(),
            source,
        })?;
        let counts = count_lines(lines, &self.runtime, &self.input)?;
        let elapsed = started.elapsed();

        let distinct = counts.len();
        let total = counts.total();
        info!(distinct, total, "Counted words");

        let entries = self.runtime.sort(counts);
        let output = self.output_path();
        report::write_report(&output, &entries, self.format)?;

        Ok(Summary {
            output,
            distinct,
            total,
            elapsed,
        })
    }
}

impl<R: Runtime> Debug for Wcount<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wcount")
            .field("input", &self.input)
            .field("output_dir", &self.output_dir)
            .field("format", &self.format)
            .finish()
    }
}

/// Count the words of every line from `reader`.
pub fn count_words<B: BufRead, R: Runtime>(
    reader: B,
    runtime: &R,
    path: &Path,
) -> Result<WordCounts, WcountError> {
    count_lines(Lines::new(reader), runtime, path)
}

fn count_lines<I, R>(lines: I, runtime: &R, path: &Path) -> Result<WordCounts, WcountError>
where
    I: Iterator<Item = io::Result<String>>,
    R: Runtime,
{
    let mut counts = WordCounts::new();
    for line in lines {
        let line = line.map_err(|source| WcountError::InputReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let words = runtime.map(&line);
        runtime.reduce(&mut counts, words);
    }
    Ok(counts)
}
