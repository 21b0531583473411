//! Command-line interface for prompt-sanitizer
//!
//! Reads untrusted content from stdin, a file, or a command's output and
//! prints it wrapped in boundary markers.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::{ContentSource, Invocation, DEFAULT_SOURCE_LABEL};
use crate::fetch::fetch_content;
use crate::render::{count_markers, wrap, END_MARKER, START_MARKER};

/// Wrap untrusted external content in boundary markers for LLM prompts
#[derive(Parser, Debug)]
#[command(name = "prompt-sanitizer")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Source label for the content
    #[arg(short, long, value_name = "LABEL", default_value = DEFAULT_SOURCE_LABEL)]
    pub source: String,

    /// File to wrap (if not reading from stdin)
    #[arg(short, long, value_name = "PATH", value_parser = clap::value_parser!(OsString))]
    pub file: Option<OsString>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run; its combined stdout and stderr are wrapped (use `--` before it)
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<OsString>,
}

impl Cli {
    pub fn into_invocation(self) -> Invocation {
        let file = self.file.map(PathBuf::from);
        Invocation::new(self.source, ContentSource::resolve(file, self.command))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let invocation = cli.into_invocation();
    execute(&invocation, io::stdin().lock(), io::stdout().lock())
}

/// Acquire the content, wrap it, and write the envelope plus a newline.
///
/// Nothing is written to `stdout` unless acquisition succeeded.
pub fn execute<R: Read, W: Write>(invocation: &Invocation, stdin: R, mut stdout: W) -> Result<()> {
    let content = fetch_content(&invocation.content_source, stdin)?;

    let embedded = count_markers(&content, START_MARKER) + count_markers(&content, END_MARKER);
    if embedded > 0 {
        tracing::debug!("Content already contains {} envelope marker(s); left verbatim", embedded);
    }

    let mut wrapped = wrap(&content, &invocation.source_label);
    wrapped.push(b'\n');
    stdout.write_all(&wrapped).context("Failed writing wrapped output")?;
    stdout.flush().context("Failed flushing stdout")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    // RUST_LOG, when set, decides the filter; otherwise --verbose picks DEBUG over WARN.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
