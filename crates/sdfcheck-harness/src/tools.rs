//! External tool availability.

use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, error};

use crate::exec::CommandRunner;
use crate::{HarnessError, Result};

/// Confirm `tool` can be invoked by asking for its version.
///
/// Any failure is fatal for the whole run.
pub fn ensure_available<R: CommandRunner>(runner: &mut R, tool: &Path) -> Result<()> {
    let reason = match runner.run(tool, &[OsString::from("-version")]) {
        Ok(output) if output.status.success() => {
            debug!(
                "Found {}: {}",
                tool.display(),
                output.stdout.lines().next().unwrap_or_default().trim()
            );
            return Ok(());
        }
        Ok(output) => format!("exited with status {}", output.status),
        Err(e) => e.to_string(),
    };

    error!("{} is not available: {reason}", tool.display());
    Err(HarnessError::ToolMissing {
        tool: tool.to_path_buf(),
        reason,
    })
}
