//! Errors that stop a run before anything is removed.

use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures. Per-artifact problems are never reported this way;
/// they are logged and the run continues.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Invalid log level: {0:?} (expected debug, info, warning, warn or error)")]
    InvalidLogLevel(String),

    #[error("\"{}\" is not a valid directory", .0.display())]
    RootNotADirectory(PathBuf),
}
