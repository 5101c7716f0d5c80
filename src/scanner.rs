//! Recursive discovery of glob-matched artifacts.

use crate::patterns::ArtifactKind;
use glob::Pattern;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lazy walk below a root yielding every entry whose file name matches one of
/// the patterns.
///
/// Entries are visited in file-name order within each directory. Symlinks are
/// not followed. For directory artifacts a matching directory is not descended
/// into, since it is about to be removed as a whole.
pub struct GlobMatches<'a> {
    walker: walkdir::IntoIter,
    patterns: &'a [Pattern],
    prune_matches: bool,
}

impl<'a> GlobMatches<'a> {
    pub fn new(root: &Path, patterns: &'a [Pattern], kind: ArtifactKind) -> Self {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        GlobMatches {
            walker,
            patterns,
            prune_matches: kind == ArtifactKind::Directory,
        }
    }

    /// Names that are not valid UTF-8 are matched lossily
    fn is_match(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}

impl Iterator for GlobMatches<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if self.patterns.is_empty() {
            return None;
        }

        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !self.is_match(entry.file_name()) {
                continue;
            }

            if self.prune_matches && entry.file_type().is_dir() {
                self.walker.skip_current_dir();
            }
            return Some(entry.into_path());
        }
    }
}

/// Start a fresh discovery of `kind` artifacts below `root`
pub fn discover<'a>(root: &Path, patterns: &'a [Pattern], kind: ArtifactKind) -> GlobMatches<'a> {
    GlobMatches::new(root, patterns, kind)
}
