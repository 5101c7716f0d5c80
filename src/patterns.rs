//! Artifact configuration loaded from artifacts.toml.

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;
use std::fmt;

/// The kind of filesystem entry an artifact is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Directory,
    File,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Directory => f.write_str("directory"),
            ArtifactKind::File => f.write_str("file"),
        }
    }
}

/// The set of artifacts a run removes.
///
/// Fixed paths are resolved against the root and processed in order;
/// glob patterns are matched against entry names anywhere below the root.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub directory_globs: Vec<Pattern>,
    pub file_globs: Vec<Pattern>,
}

/// Structure to deserialize the artifact list from TOML
#[derive(Debug, Deserialize)]
struct ArtifactConfig {
    #[serde(default)]
    directories: SectionConfig,
    #[serde(default)]
    files: SectionConfig,
}

#[derive(Debug, Default, Deserialize)]
struct SectionConfig {
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default)]
    globs: Vec<String>,
}

// Embed the TOML file directly in the binary at compile time
const ARTIFACTS_TOML: &str = include_str!("../artifacts.toml");

fn compile_globs(globs: &[String]) -> Result<Vec<Pattern>> {
    globs
        .iter()
        .map(|g| Pattern::new(g).with_context(|| format!("Invalid glob pattern '{}'", g)))
        .collect()
}

impl ArtifactSpec {
    /// Build an artifact set from explicit lists. Used by tests and library callers
    /// that need a different artifact set.
    pub fn new<D, F>(directories: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        ArtifactSpec {
            directories: directories.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
            directory_globs: Vec::new(),
            file_globs: Vec::new(),
        }
    }

    /// Add glob patterns, e.g. `with_globs(&["*.egg-info"], &["*.pyc"])`
    pub fn with_globs(mut self, directory_globs: &[&str], file_globs: &[&str]) -> Result<Self> {
        let owned = |g: &[&str]| g.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        self.directory_globs
            .extend(compile_globs(&owned(directory_globs))?);
        self.file_globs.extend(compile_globs(&owned(file_globs))?);
        Ok(self)
    }

    /// Parse an artifact set from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ArtifactConfig =
            toml::from_str(text).context("Failed to parse artifacts TOML file")?;

        Ok(ArtifactSpec {
            directory_globs: compile_globs(&config.directories.globs)?,
            file_globs: compile_globs(&config.files.globs)?,
            directories: config.directories.paths,
            files: config.files.paths,
        })
    }

    /// The artifact set compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(ARTIFACTS_TOML)
    }

    /// Fixed paths of the given kind, in processing order
    pub fn paths(&self, kind: ArtifactKind) -> &[String] {
        match kind {
            ArtifactKind::Directory => &self.directories,
            ArtifactKind::File => &self.files,
        }
    }

    /// Glob patterns of the given kind
    pub fn globs(&self, kind: ArtifactKind) -> &[Pattern] {
        match kind {
            ArtifactKind::Directory => &self.directory_globs,
            ArtifactKind::File => &self.file_globs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists() {
        let spec = ArtifactSpec::builtin().unwrap();

        assert_eq!(spec.directories.len(), 10);
        assert_eq!(spec.directories.first().map(String::as_str), Some("__pycache__"));
        assert!(spec.directories.iter().any(|d| d == ".pytest_cache"));
        assert!(spec.directories.iter().any(|d| d == "htmlcov"));
        assert_eq!(spec.files, vec![".coverage", "coverage.xml"]);
    }

    #[test]
    fn test_builtin_globs() {
        let spec = ArtifactSpec::builtin().unwrap();

        assert_eq!(spec.directory_globs.len(), 1);
        assert!(spec.directory_globs[0].matches("my_package.egg-info"));
        assert!(!spec.directory_globs[0].matches("egg-info.txt"));

        assert_eq!(spec.file_globs.len(), 1);
        assert!(spec.file_globs[0].matches("module.cpython-312.pyc"));
        assert!(!spec.file_globs[0].matches("module.py"));
    }

    #[test]
    fn test_from_toml_missing_sections_are_empty() {
        let spec = ArtifactSpec::from_toml("[files]\npaths = [\"a.log\"]\n").unwrap();
        assert!(spec.directories.is_empty());
        assert!(spec.directory_globs.is_empty());
        assert_eq!(spec.paths(ArtifactKind::File), ["a.log".to_string()]);
    }

    #[test]
    fn test_from_toml_rejects_bad_glob() {
        let err = ArtifactSpec::from_toml("[directories]\nglobs = [\"[\"]\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid glob pattern"));
    }

    #[test]
    fn test_from_toml_rejects_malformed_toml() {
        assert!(ArtifactSpec::from_toml("[directories\npaths = 1").is_err());
    }

    #[test]
    fn test_new_has_no_globs() {
        let spec = ArtifactSpec::new(["build"], ["coverage.xml"]);
        assert_eq!(spec.paths(ArtifactKind::Directory), ["build".to_string()]);
        assert!(spec.globs(ArtifactKind::Directory).is_empty());
        assert!(spec.globs(ArtifactKind::File).is_empty());
    }

    #[test]
    fn test_with_globs() {
        let spec = ArtifactSpec::new(Vec::<String>::new(), Vec::<String>::new())
            .with_globs(&["*.egg-info"], &["*.pyc", "*.pyo"])
            .unwrap();
        assert_eq!(spec.globs(ArtifactKind::Directory).len(), 1);
        assert_eq!(spec.globs(ArtifactKind::File).len(), 2);
    }
}
