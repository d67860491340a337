//! Pretty-printer boundary.
//!
//! Formatting is cosmetic: the composer falls back to its own output when a
//! formatter fails, so implementations only need to report errors.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to run formatter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("formatter `{program}` I/O failed: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("formatter `{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("formatter output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("formatter produced no output")]
    Empty,
}

pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Leaves the text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

/// Pipes the text through an external program on stdin/stdout.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `prettier --parser typescript`.
    pub fn prettier() -> Self {
        Self::new("prettier", ["--parser", "typescript"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::prettier()
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let io_error = |source| FormatError::Io {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from its own thread so a large output cannot fill the
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = source.to_string();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output().map_err(io_error)?;
        if let Some(writer) = writer {
            stdin_outcome(writer.join()).map_err(io_error)?;
        }

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let formatted = String::from_utf8(output.stdout)?;
        if formatted.trim().is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(formatted)
    }
}

/// Collapse the stdin writer thread's result into a single I/O result.
///
/// A broken pipe is fine: the program may exit without reading all of its
/// input, and its exit status decides the outcome.
fn stdin_outcome(joined: thread::Result<io::Result<()>>) -> io::Result<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Ok(Err(err)) => Err(err),
        Err(_) => Err(io::Error::other("stdin writer panicked")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_returns_input() {
        assert_eq!(NoopFormatter.format("a: never;").unwrap(), "a: never;");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let formatter = CommandFormatter::new("theme-typings-no-such-formatter", ["--stdin"]);
        let err = formatter.format("a: never;").unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
        assert!(err.to_string().contains("theme-typings-no-such-formatter"));
    }

    #[test]
    fn stdin_writer_outcomes() {
        assert!(stdin_outcome(Ok(Ok(()))).is_ok());
        assert!(stdin_outcome(Ok(Err(io::Error::from(ErrorKind::BrokenPipe)))).is_ok());

        let denied = io::Error::from(ErrorKind::PermissionDenied);
        let err = stdin_outcome(Ok(Err(denied))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        let panic: Box<dyn std::any::Any + Send> = Box::new("writer blew up");
        let err = stdin_outcome(Err(panic)).unwrap_err();
        assert!(err.to_string().contains("panicked"));
    }

    #[cfg(unix)]
    #[test]
    fn pipes_through_the_program() {
        let formatter = CommandFormatter::new("cat", std::iter::empty::<String>());
        assert_eq!(formatter.format("a: never;\n").unwrap(), "a: never;\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let formatter = CommandFormatter::new("false", std::iter::empty::<String>());
        assert!(matches!(
            formatter.format("a: never;"),
            Err(FormatError::Failed { .. })
        ));
    }
}
