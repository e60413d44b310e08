use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{ExecutionError, ExecutionResult};

/// Terminal observation for one artifact execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The artifact ran to completion with this exit code. A child killed
    /// by a signal reports -1, matching the convention of the upstream
    /// service's other probes.
    Completed(i32),
    /// The artifact was gone from disk immediately before spawn. Not an
    /// error: quarantine software removing the payload between install and
    /// execution is a legitimate observation this probe exists to make.
    Missing,
}

/// Run an installed artifact as a blocking child process with no
/// arguments, streaming its stdout/stderr through the probe's own.
pub fn run(path: &Path) -> ExecutionResult<Outcome> {
    if !path.exists() {
        return Ok(Outcome::Missing);
    }

    debug!(path = %path.display(), "spawning artifact");
    let status = Command::new(path)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ExecutionError::Spawn {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Outcome::Completed(status.code().unwrap_or(-1)))
}
