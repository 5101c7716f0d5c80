//! Removal of classified artifact paths.
//!
//! Neither operation ever fails: OS errors become
//! [`RemovalOutcome::FailedWithError`] and are logged at error level, a kind
//! mismatch is skipped with a warning, and an absent path is a debug note.

use crate::classify::ClassifiedPath;
use crate::patterns::ArtifactKind;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, warn};

/// The deletion calls used by the remover
pub trait FileSystem {
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Result of one removal attempt
#[derive(Debug)]
pub enum RemovalOutcome {
    Removed,
    SkippedAbsent,
    SkippedTypeMismatch,
    FailedWithError(io::Error),
}

impl RemovalOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemovalOutcome::Removed)
    }
}

/// Remove `path` as an artifact of `kind`, given what [`classify`] found there.
///
/// [`classify`]: crate::classify::classify
pub fn remove(
    fs: &dyn FileSystem,
    kind: ArtifactKind,
    classified: ClassifiedPath,
    path: &Path,
) -> RemovalOutcome {
    if classified == ClassifiedPath::Absent {
        debug!("\"{}\" does not exist.", path.display());
        return RemovalOutcome::SkippedAbsent;
    }

    if classified.mismatches(kind) {
        warn!(
            "\"{}\" exists but is not a {}. Skipping {} removal.",
            path.display(),
            kind,
            kind
        );
        return RemovalOutcome::SkippedTypeMismatch;
    }

    debug!("Removing {}: {}", kind, path.display());
    let result = match kind {
        ArtifactKind::Directory => fs.remove_dir_all(path),
        ArtifactKind::File => fs.remove_file(path),
    };

    match result {
        Ok(()) => RemovalOutcome::Removed,
        Err(err) => {
            error!("Error removing {} {}: {}", kind, path.display(), err);
            RemovalOutcome::FailedWithError(err)
        }
    }
}

/// Recursively remove a directory artifact
pub fn remove_directory(
    fs: &dyn FileSystem,
    classified: ClassifiedPath,
    path: &Path,
) -> RemovalOutcome {
    remove(fs, ArtifactKind::Directory, classified, path)
}

/// Remove a file artifact
pub fn remove_file(fs: &dyn FileSystem, classified: ClassifiedPath, path: &Path) -> RemovalOutcome {
    remove(fs, ArtifactKind::File, classified, path)
}
