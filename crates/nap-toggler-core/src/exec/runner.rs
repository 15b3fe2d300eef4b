//! Process execution for setting queries and privileged writes.

use crate::{CoreError, CoreResult, privileged_script};

use std::{panic::Location, path::PathBuf, process::Command};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

const OSASCRIPT_PATH: &str = "/usr/bin/osascript";

/// Executes the external commands behind every setting read and write.
pub trait CommandRunner {
    /// Run a read-only command and return its stdout.
    fn query(&self, program: &str, args: &[&str]) -> CoreResult<String>;

    /// Run `command` through a shell with administrator privileges.
    ///
    /// Returns the combined stdout and stderr. An unsuccessful exit is
    /// [`CoreError::PrivilegedCommandFailed`].
    fn run_privileged(&self, command: &str, prompt: &str) -> CoreResult<String>;
}

/// [`CommandRunner`] backed by real subprocesses.
///
/// Every call blocks until the child exits and its output is collected.
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    osascript: PathBuf,
}

impl SystemCommandRunner {
    /// Use a specific `osascript` binary for privilege elevation.
    pub fn with_osascript(osascript: impl Into<PathBuf>) -> Self {
        Self {
            osascript: osascript.into(),
        }
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::with_osascript(OSASCRIPT_PATH)
    }
}

impl CommandRunner for SystemCommandRunner {
    #[track_caller]
    #[instrument(skip(self))]
    fn query(&self, program: &str, args: &[&str]) -> CoreResult<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CoreError::SpawnFailed {
                program: program.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| CoreError::InvalidOutput {
            program: program.to_string(),
            reason: format!("stdout is not UTF-8: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(program, status = %output.status, stdout_len = stdout.len(), "Query finished");

        Ok(stdout)
    }

    #[track_caller]
    #[instrument(skip(self, prompt))]
    fn run_privileged(&self, command: &str, prompt: &str) -> CoreResult<String> {
        let script = privileged_script(command, prompt);

        let output = Command::new(&self.osascript)
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|source| CoreError::SpawnFailed {
                program: self.osascript.display().to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        if !combined.is_empty() {
            debug!(output = %combined, "osascript output");
        }

        if !output.status.success() {
            return Err(CoreError::PrivilegedCommandFailed {
                status: output.status.to_string(),
                output: combined,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(combined)
    }
}
