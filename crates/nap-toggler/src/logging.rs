//! Tracing subscriber setup: console output plus an optional rolling file.

use crate::{
    AppError, AppResult,
    config::{Config, DEFAULT_LOG_FILTER, LoggingConfig},
};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::warn;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "nap-toggler.log";

/// Run `f` with a console-only subscriber active.
///
/// Covers startup work that happens before the configured subscriber
/// exists, such as loading the config that configures it.
pub fn with_bootstrap<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured filter. If the log file cannot be
/// opened, logging continues on stdout only. The returned guard flushes the
/// file writer on drop and must live until the process exits.
#[track_caller]
pub fn init(config: &LoggingConfig) -> AppResult<Option<WorkerGuard>> {
    let (file_layer, guard, file_error) = if config.file {
        match Config::log_dir().and_then(|log_dir| file_writer(&log_dir)) {
            Ok((writer, guard)) => (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
                None,
            ),
            Err(e) => (None, None, Some(e)),
        }
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.filter))
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(e) = file_error {
        warn!(error = ?e, "File logging unavailable, logging to stdout only");
    }

    Ok(guard)
}

/// Open a non-blocking daily rolling log file in `log_dir`.
#[track_caller]
pub fn file_writer(log_dir: &Path) -> AppResult<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to open log file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(tracing_appender::non_blocking(appender))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default))
}
