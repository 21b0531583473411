//! Subprocess execution with combined output capture

use crate::error::AcquireError;
use std::ffi::{OsStr, OsString};
use std::io::{self, Read};
use std::process::{Command, Stdio};

/// Run `program` with `args` and capture stdout and stderr as one blob.
///
/// Both streams are attached to the same pipe, so the blob keeps the order in
/// which the child wrote them. The child gets a null stdin. A non-zero exit
/// status discards whatever the child printed.
pub fn run_command(program: &OsStr, args: &[OsString]) -> Result<Vec<u8>, AcquireError> {
    let name = program.to_string_lossy().into_owned();
    let spawn_err = |source: io::Error| AcquireError::Spawn { program: name.clone(), source };

    let (mut reader, writer) = io::pipe().map_err(spawn_err)?;
    let writer_err = writer.try_clone().map_err(spawn_err)?;

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null()).stdout(writer).stderr(writer_err);
    let mut child = command.spawn().map_err(spawn_err)?;
    // Close the parent's write ends, otherwise the read never sees EOF.
    drop(command);

    let mut output = Vec::new();
    let read_result = reader.read_to_end(&mut output);
    let status = child
        .wait()
        .map_err(|source| AcquireError::CommandIo { program: name.clone(), source })?;
    read_result.map_err(|source| AcquireError::CommandIo { program: name.clone(), source })?;

    tracing::debug!("Command {} exited with {} after {} bytes", name, status, output.len());
    if !status.success() {
        return Err(AcquireError::CommandFailed { program: name, status });
    }

    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::run_command;
    use crate::error::AcquireError;
    use std::ffi::{OsStr, OsString};

    fn sh(script: &str) -> Result<Vec<u8>, AcquireError> {
        run_command(OsStr::new("sh"), &[OsString::from("-c"), OsString::from(script)])
    }

    #[test]
    fn captures_stdout() {
        let out = run_command(OsStr::new("echo"), &[OsString::from("command output")])
            .expect("echo");
        assert_eq!(out, b"command output\n");
    }

    #[test]
    fn captures_stderr_interleaved_with_stdout() {
        let out = sh("echo first; echo second 1>&2; echo third").expect("sh");
        assert_eq!(out, b"first\nsecond\nthird\n");
    }

    #[test]
    fn child_stdin_is_empty() {
        let out = run_command(OsStr::new("cat"), &[]).expect("cat");
        assert!(out.is_empty());
    }

    #[test]
    fn non_zero_exit_fails_even_with_output() {
        let err = sh("echo partial output; exit 3").expect_err("exit 3");
        match err {
            AcquireError::CommandFailed { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let err = run_command(OsStr::new("nonexistent-command-12345"), &[])
            .expect_err("missing program");
        assert!(matches!(err, AcquireError::Spawn { .. }));
        assert!(err.to_string().contains("nonexistent-command-12345"));
    }

    #[test]
    fn large_output_is_fully_captured() {
        let out = sh("head -c 1048576 /dev/zero | tr '\\0' 'x'").expect("sh");
        assert_eq!(out.len(), 1_048_576);
        assert!(out.iter().all(|&b| b == b'x'));
    }
}
