use crate::logging::{file_writer, with_bootstrap};

use std::{fs, path::PathBuf};

use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("nap-toggler-log-test-{}", Uuid::new_v4()))
}

/// WHAT: Log writer opens in a fresh directory
/// WHY: File logging is on by default and must create its own directory
#[test]
fn given_missing_log_dir_when_opening_writer_then_created() {
    // Given: A directory that does not exist yet
    let dir = scratch_dir().join("logs");

    // When: Opening the writer
    let result = file_writer(&dir);

    // Then: Succeeds and the directory exists
    assert!(result.is_ok());
    assert!(dir.is_dir());

    drop(result);
    let _ = fs::remove_dir_all(dir.parent().unwrap_or(&dir));
}

/// WHAT: Unusable log directory is an error, not a panic
/// WHY: Startup falls back to stdout-only logging on this error
#[test]
#[allow(clippy::unwrap_used)]
fn given_log_dir_under_a_file_when_opening_writer_then_error() {
    // Given: A regular file where the log directory's parent should be
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    // When: Opening a writer beneath it
    let result = file_writer(&blocker.join("logs"));

    // Then: Error
    assert!(result.is_err());

    let _ = fs::remove_dir_all(dir);
}

/// WHAT: Bootstrap subscriber passes the closure's result through
/// WHY: Config loading runs inside it at startup
#[test]
fn given_closure_when_run_with_bootstrap_then_result_returned() {
    let value = with_bootstrap(|| {
        tracing::info!("Logged before the main subscriber exists");
        42
    });

    assert_eq!(value, 42);
}
