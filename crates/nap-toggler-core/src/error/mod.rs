use error_location::ErrorLocation;
use thiserror::Error;

/// Setting query and toggle errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The command could not be started at all.
    #[error("Failed to spawn {program}: {source} {location}")]
    SpawnFailed {
        /// Program that failed to start.
        program: String,
        /// Underlying IO error from the spawn.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The privileged command ran but exited unsuccessfully.
    ///
    /// This is what a cancelled or denied credential prompt looks like.
    #[error("Privileged command failed ({status}): {output} {location}")]
    PrivilegedCommandFailed {
        /// Exit status as reported by the OS.
        status: String,
        /// Combined stdout and stderr of the command.
        output: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The command produced output that could not be used.
    #[error("Invalid output from {program}: {reason} {location}")]
    InvalidOutput {
        /// Program whose output was rejected.
        program: String,
        /// Description of the problem.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
