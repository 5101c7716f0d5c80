//! pyproject-clean - Python Build Artifact Cleaner
//!
//! Removes a fixed list of build and cache artifacts (from artifacts.toml)
//! below a project root, plus anything matching the configured glob patterns
//! (`*.egg-info` directories and `*.pyc` files by default).
//!
//! Every artifact is first classified (directory, file or absent) and only
//! then removed, so a missing target, an entry of the wrong kind and a
//! genuine OS failure are each reported differently. None of them stop the
//! run; only an invalid log level or a root that is not a directory do.

pub mod classify;
pub mod cleaner;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod remover;
pub mod scanner;

// Re-export commonly used items
pub use classify::{classify, ClassifiedPath};
pub use cleaner::{AssumeYes, Cleaner, Confirm, Prompt, RunSummary};
pub use error::CleanError;
pub use logging::LogLevel;
pub use patterns::{ArtifactKind, ArtifactSpec};
pub use remover::{remove_directory, remove_file, FileSystem, OsFileSystem, RemovalOutcome};
pub use scanner::{discover, GlobMatches};
