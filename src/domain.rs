//! Core types shared by the CLI and the fetchers.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Label used when the caller does not name the content's origin.
pub const DEFAULT_SOURCE_LABEL: &str = "Unknown";

/// Where the content comes from. Chosen once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Read standard input to end-of-input.
    Stdin,
    /// Read a whole file.
    File(PathBuf),
    /// Run a program and capture its combined stdout and stderr.
    Command { program: OsString, args: Vec<OsString> },
}

impl ContentSource {
    /// Pick the acquisition mode: command, then file, then stdin.
    ///
    /// An empty file path counts as unset.
    pub fn resolve(file: Option<PathBuf>, command: Vec<OsString>) -> Self {
        let mut command = command.into_iter();
        if let Some(program) = command.next() {
            return Self::Command { program, args: command.collect() };
        }

        match file {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Command { program, args } => {
                write!(f, "command {}", program.to_string_lossy())?;
                for arg in args {
                    write!(f, " {}", arg.to_string_lossy())?;
                }
                Ok(())
            }
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source_label: String,
    pub content_source: ContentSource,
}

impl Invocation {
    pub fn new(source_label: impl Into<String>, content_source: ContentSource) -> Self {
        Self { source_label: source_label.into(), content_source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn resolve_defaults_to_stdin() {
        assert_eq!(ContentSource::resolve(None, Vec::new()), ContentSource::Stdin);
    }

    #[test]
    fn resolve_empty_file_path_is_stdin() {
        let source = ContentSource::resolve(Some(PathBuf::new()), Vec::new());
        assert_eq!(source, ContentSource::Stdin);
    }

    #[test]
    fn resolve_prefers_file_over_stdin() {
        let source = ContentSource::resolve(Some(PathBuf::from("notes.txt")), Vec::new());
        assert_eq!(source, ContentSource::File(PathBuf::from("notes.txt")));
    }

    #[test]
    fn resolve_prefers_command_over_file() {
        let source =
            ContentSource::resolve(Some(PathBuf::from("notes.txt")), os(&["echo", "-n", "hi"]));
        assert_eq!(
            source,
            ContentSource::Command { program: OsString::from("echo"), args: os(&["-n", "hi"]) }
        );
    }

    #[test]
    fn describe_command_includes_args() {
        let source = ContentSource::resolve(None, os(&["curl", "-s", "https://example.com"]));
        assert_eq!(source.describe(), "command curl -s https://example.com");
    }
}
