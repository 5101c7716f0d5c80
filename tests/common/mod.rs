#![allow(dead_code)]

use pyproject_clean::{ArtifactSpec, Cleaner, FileSystem, LogLevel, OsFileSystem, RunSummary};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `cleaner` against `root` at `level`, returning the summary and the log lines
pub fn run_logged<F: FileSystem>(
    cleaner: &Cleaner<'_, F>,
    root: &Path,
    level: LogLevel,
) -> (RunSummary, Vec<String>) {
    let captured = Captured::default();
    let summary = cleaner
        .run_with_writer(root, level, captured.clone())
        .expect("run should succeed");
    (summary, captured.lines())
}

/// Run the OS-backed cleaner for `spec`
pub fn clean(spec: &ArtifactSpec, root: &Path, level: LogLevel) -> (RunSummary, Vec<String>) {
    run_logged(&Cleaner::new(spec), root, level)
}

/// Create every directory and file of `spec`'s fixed lists below a fresh temp dir
pub fn populated_root(spec: &ArtifactSpec) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for d in &spec.directories {
        fs::create_dir_all(dir.path().join(d)).unwrap();
    }
    for f in &spec.files {
        let path = dir.path().join(f);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }
    dir
}

/// Filesystem that refuses to delete one path with "permission denied"
pub struct DenyPath(pub PathBuf);

impl FileSystem for DenyPath {
    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if path == self.0 {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        OsFileSystem.remove_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if path == self.0 {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        OsFileSystem.remove_file(path)
    }
}
