//! Path types
//!
//! `Path` identifies one file, one directory or a glob pattern.

use std::fmt;
use std::path::{Component, Path as StdPath, PathBuf};

/// Characters that turn a path into a glob pattern
const PATTERN_CHARS: &[char] = &['*', '?', '['];

/// A file location or glob pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    raw: PathBuf,
    pattern: bool,
}

impl Path {
    /// Create a path from a raw string, as given
    pub fn new(raw: impl AsRef<StdPath>) -> Self {
        let raw = raw.as_ref().to_path_buf();
        let pattern = raw.to_string_lossy().contains(PATTERN_CHARS);
        Self { raw, pattern }
    }

    /// Create an absolute, lexically normalised path
    ///
    /// Relative paths are resolved against the current directory; `.` and
    /// `..` segments are folded without touching the filesystem, so patterns
    /// and not-yet-existing destinations are accepted.
    pub fn realpath(raw: impl AsRef<StdPath>) -> Self {
        let raw = raw.as_ref();
        let absolute = if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(raw),
                Err(_) => raw.to_path_buf(),
            }
        };
        Self::new(normalize(&absolute))
    }

    /// The path as a standard library path
    pub fn as_std(&self) -> &StdPath {
        &self.raw
    }

    /// The path as a (lossy) string
    pub fn path(&self) -> String {
        self.raw.to_string_lossy().into_owned()
    }

    /// Whether the path contains glob characters
    pub fn is_pattern(&self) -> bool {
        self.pattern
    }

    /// The file extension, if any
    pub fn extension(&self) -> Option<&str> {
        self.raw.extension().and_then(|e| e.to_str())
    }

    /// Append a segment
    #[must_use]
    pub fn join(&self, segment: impl AsRef<StdPath>) -> Self {
        Self::new(self.raw.join(segment))
    }

    /// `key=value` pairs encoded in the directory segments, outermost first
    pub fn partitions(&self) -> Vec<(String, String)> {
        let Some(parent) = self.raw.parent() else {
            return Vec::new();
        };
        parent
            .components()
            .filter_map(|c| match c {
                Component::Normal(segment) => segment.to_str().and_then(parse_partition_segment),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.display())
    }
}

impl AsRef<StdPath> for Path {
    fn as_ref(&self) -> &StdPath {
        &self.raw
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Self::realpath(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self::realpath(value)
    }
}

impl From<&StdPath> for Path {
    fn from(value: &StdPath) -> Self {
        Self::realpath(value)
    }
}

impl From<PathBuf> for Path {
    fn from(value: PathBuf) -> Self {
        Self::realpath(value)
    }
}

impl From<&PathBuf> for Path {
    fn from(value: &PathBuf) -> Self {
        Self::realpath(value)
    }
}

/// Parse a `key=value` directory segment
fn parse_partition_segment(segment: &str) -> Option<(String, String)> {
    let (key, value) = segment.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Fold `.` and `..` segments
fn normalize(path: &StdPath) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ============================================================================
// Path Input
// ============================================================================

/// One or many source paths handed to an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// A single file, directory or pattern
    Single(Path),
    /// Several inputs, resolved one after another in order
    Many(Vec<Path>),
}

impl PathInput {
    /// All inputs in order
    pub fn paths(&self) -> Vec<Path> {
        match self {
            PathInput::Single(path) => vec![path.clone()],
            PathInput::Many(paths) => paths.clone(),
        }
    }

    /// Check if there is nothing to read
    pub fn is_empty(&self) -> bool {
        matches!(self, PathInput::Many(paths) if paths.is_empty())
    }
}

impl From<Path> for PathInput {
    fn from(value: Path) -> Self {
        PathInput::Single(value)
    }
}

impl From<&str> for PathInput {
    fn from(value: &str) -> Self {
        PathInput::Single(value.into())
    }
}

impl From<String> for PathInput {
    fn from(value: String) -> Self {
        PathInput::Single(value.into())
    }
}

impl From<&StdPath> for PathInput {
    fn from(value: &StdPath) -> Self {
        PathInput::Single(value.into())
    }
}

impl From<PathBuf> for PathInput {
    fn from(value: PathBuf) -> Self {
        PathInput::Single(value.into())
    }
}

impl From<&PathBuf> for PathInput {
    fn from(value: &PathBuf) -> Self {
        PathInput::Single(value.into())
    }
}

impl<T: Into<Path>> From<Vec<T>> for PathInput {
    fn from(value: Vec<T>) -> Self {
        PathInput::Many(value.into_iter().map(Into::into).collect())
    }
}
