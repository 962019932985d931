//! Console verdict lines.

use std::io::{self, Write};

use crate::outcome::JobResult;

/// Writes one `PASS`/`FAIL` line per job.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the verdict for `result` immediately.
    pub fn report(&mut self, result: &JobResult) -> io::Result<()> {
        writeln!(self.out, "{}", verdict_line(result))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `PASS "<path>" <message>` or `FAIL "<path>" <message>`.
pub fn verdict_line(result: &JobResult) -> String {
    let label = if result.outcome.is_pass() {
        "PASS"
    } else {
        "FAIL"
    };
    format!(
        "{label} \"{}\" {}",
        result.job.input.display(),
        result.outcome
    )
}
