//! Acquisition errors

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to obtain the content blob. Every variant is fatal to the invocation.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("reading file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading file {}: is a directory", path.display())]
    IsDirectory { path: PathBuf },

    #[error("executing command {program}: failed to start")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("executing command {program}: failed to capture output")]
    CommandIo {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("executing command {program}: {status}")]
    CommandFailed { program: String, status: ExitStatus },

    #[error("reading stdin")]
    ReadStdin(#[source] io::Error),
}
