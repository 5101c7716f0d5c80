//! The cleanup run: fixed artifacts, then glob-discovered ones.

use crate::classify::{classify, resolve};
use crate::error::CleanError;
use crate::logging::{self, LogLevel};
use crate::patterns::{ArtifactKind, ArtifactSpec};
use crate::remover::{remove, FileSystem, OsFileSystem};
use crate::scanner::discover;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;

/// Counts of artifacts actually removed during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_removed: usize,
    pub directories_removed: usize,
}

impl RunSummary {
    fn record(&mut self, kind: ArtifactKind) {
        match kind {
            ArtifactKind::Directory => self.directories_removed += 1,
            ArtifactKind::File => self.files_removed += 1,
        }
    }
}

/// Asked once per run, after the root is announced and before anything is removed
pub trait Confirm {
    fn confirm(&mut self, root: &Path) -> io::Result<bool>;
}

/// Always proceed (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _root: &Path) -> io::Result<bool> {
        Ok(true)
    }
}

/// Interactive `Proceed? (y/N)` prompt. Anything that does not start with
/// `y` or `Y`, including end of input, declines.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Prompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, _root: &Path) -> io::Result<bool> {
        write!(self.output, "{}", "Proceed? (y/N): ".bold())?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.to_lowercase().starts_with('y'))
    }
}

/// Removes the artifacts of an [`ArtifactSpec`] below a root directory
pub struct Cleaner<'a, F: FileSystem = OsFileSystem> {
    spec: &'a ArtifactSpec,
    fs: F,
}

impl<'a> Cleaner<'a> {
    pub fn new(spec: &'a ArtifactSpec) -> Self {
        Cleaner {
            spec,
            fs: OsFileSystem,
        }
    }
}

impl<'a, F: FileSystem> Cleaner<'a, F> {
    /// Use a different [`FileSystem`] for the deletion calls
    pub fn with_filesystem<G: FileSystem>(self, fs: G) -> Cleaner<'a, G> {
        Cleaner {
            spec: self.spec,
            fs,
        }
    }

    /// Clean `root` without asking for confirmation
    pub fn run(&self, root: &Path) -> Result<RunSummary, CleanError> {
        let summary = self.run_with(root, &mut AssumeYes)?;
        Ok(summary.unwrap_or_default())
    }

    /// Clean `root` without confirmation, printing messages at or above
    /// `level` to stdout for the duration of the run
    pub fn run_at(&self, root: &Path, level: LogLevel) -> Result<RunSummary, CleanError> {
        self.run_with_writer(root, level, io::stdout)
    }

    /// Like [`Cleaner::run_at`], but messages go to `writer`
    pub fn run_with_writer<W>(
        &self,
        root: &Path,
        level: LogLevel,
        writer: W,
    ) -> Result<RunSummary, CleanError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        tracing::subscriber::with_default(logging::subscriber(level, writer), || self.run(root))
    }

    /// Clean `root`, asking `confirm` first.
    ///
    /// Returns `Ok(None)` when confirmation is declined or cannot be read;
    /// nothing is removed in that case. Only a root that is not a directory
    /// is an error. Individual artifacts that cannot be removed are logged.
    pub fn run_with(
        &self,
        root: &Path,
        confirm: &mut dyn Confirm,
    ) -> Result<Option<RunSummary>, CleanError> {
        if !root.is_dir() {
            return Err(CleanError::RootNotADirectory(root.to_path_buf()));
        }

        info!("Cleaning directory: {}", root.display());

        match confirm.confirm(root) {
            Ok(true) => {}
            Ok(false) => return Ok(None),
            Err(err) => {
                debug!("Could not read confirmation: {}", err);
                return Ok(None);
            }
        }

        let mut summary = RunSummary::default();

        for kind in [ArtifactKind::Directory, ArtifactKind::File] {
            for relative in self.spec.paths(kind) {
                let path = resolve(root, Path::new(relative));
                self.clean_one(root, kind, &path, &mut summary);
            }
        }

        for kind in [ArtifactKind::Directory, ArtifactKind::File] {
            for path in discover(root, self.spec.globs(kind), kind) {
                self.clean_one(root, kind, &path, &mut summary);
            }
        }

        info!(
            "Cleaning complete: {} files, {} directories removed.",
            summary.files_removed, summary.directories_removed
        );

        Ok(Some(summary))
    }

    fn clean_one(&self, root: &Path, kind: ArtifactKind, path: &Path, summary: &mut RunSummary) {
        let classified = classify(root, path);
        if remove(&self.fs, kind, classified, path).is_removed() {
            summary.record(kind);
        }
    }
}
