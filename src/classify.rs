//! Read-only inspection of artifact paths.

use crate::patterns::ArtifactKind;
use std::fs;
use std::path::{Path, PathBuf};

/// What the filesystem holds at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedPath {
    Directory,
    File,
    /// Missing, or its metadata could not be read
    Absent,
}

impl ClassifiedPath {
    /// True when the entry exists but is not of the `expected` kind
    pub fn mismatches(self, expected: ArtifactKind) -> bool {
        matches!(
            (self, expected),
            (ClassifiedPath::File, ArtifactKind::Directory)
                | (ClassifiedPath::Directory, ArtifactKind::File)
        )
    }
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Classify `path` (relative paths are joined onto `root`).
///
/// Follows symlinks. Any metadata error counts as [`ClassifiedPath::Absent`];
/// anything that exists and is not a directory counts as a file.
pub fn classify(root: &Path, path: &Path) -> ClassifiedPath {
    match fs::metadata(resolve(root, path)) {
        Ok(meta) if meta.is_dir() => ClassifiedPath::Directory,
        Ok(_) => ClassifiedPath::File,
        Err(_) => ClassifiedPath::Absent,
    }
}
