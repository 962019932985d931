//! Narrow interface for running external programs.
//!
//! Renderer, comparator and collage invocations all go through
//! [`CommandRunner`], so tests can substitute a deterministic fake.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Exit status of a finished child process.
///
/// `None` means the process was terminated without an exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitStatus(pub Option<i32>);

impl ExitStatus {
    /// Returns true if the process exited with code 0.
    #[inline]
    pub const fn success(self) -> bool {
        matches!(self.0, Some(0))
    }

    /// The exit code, if any.
    #[inline]
    pub const fn code(self) -> Option<i32> {
        self.0
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{code}"),
            None => f.write_str("killed"),
        }
    }
}

/// Exit status and captured streams of a finished child process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutput {
    /// How the process ended
    pub status: ExitStatus,
    /// Captured standard output, lossily decoded
    pub stdout: String,
    /// Captured standard error, lossily decoded
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a process that exited with `code`.
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status: ExitStatus(Some(code)),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Runs a program to completion and captures its output.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Err` only if the process could not be started.
    fn run(&mut self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by real child processes.
///
/// No timeout is applied; a hung child blocks the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput> {
        debug!("Running {}", command_line(program, args));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            status: ExitStatus(output.status.code()),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Render a command line for logs.
pub fn command_line(program: &Path, args: &[OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        let arg = arg.to_string_lossy();
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(&arg);
            line.push('"');
        } else {
            line.push_str(&arg);
        }
    }
    line
}
