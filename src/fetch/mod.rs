//! Content acquisition (stdin, file, subprocess)

use crate::domain::ContentSource;
use crate::error::AcquireError;
use std::io::Read;

pub mod command;
pub mod file;
pub mod stdin;

/// Fetch the whole content blob for one invocation.
///
/// Dispatches on the resolved source:
/// - [`ContentSource::Command`] → [`command::run_command`]
/// - [`ContentSource::File`] → [`file::read_file`]
/// - [`ContentSource::Stdin`] → [`stdin::read_stream`] over `stdin`
///
/// `stdin` is only read in stream mode. There is no fallback between modes.
pub fn fetch_content<R: Read>(source: &ContentSource, stdin: R) -> Result<Vec<u8>, AcquireError> {
    tracing::debug!("Acquiring content from {}", source.describe());

    let content = match source {
        ContentSource::Command { program, args } => command::run_command(program, args)?,
        ContentSource::File(path) => file::read_file(path)?,
        ContentSource::Stdin => stdin::read_stream(stdin)?,
    };

    tracing::debug!("Acquired {} bytes", content.len());
    Ok(content)
}
