//! Path resolution
//!
//! Expands user input into a lazy sequence of concrete files.

use super::types::{Path, PathInput};
use crate::error::{Error, Result};
use crate::partition::PartitionFilter;
use crate::types::is_yaml_extension;
use std::collections::VecDeque;
use tracing::debug;

/// Expands paths, patterns and directories into files
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    filter: Option<PartitionFilter>,
}

impl PathResolver {
    /// Create a resolver without a partition filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep files whose `key=value` directories match the filter
    #[must_use]
    pub fn with_filter(mut self, filter: PartitionFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The configured partition filter
    pub fn filter(&self) -> Option<&PartitionFilter> {
        self.filter.as_ref()
    }

    /// Resolve the input into a lazy, single-pass file sequence
    ///
    /// Inputs are expanded in order. Patterns and directories are scanned
    /// only when the sequence reaches them.
    pub fn resolve(&self, input: &PathInput) -> ResolvedPaths {
        ResolvedPaths {
            pending: input.paths().into(),
            scan: None,
            filter: self.filter.clone(),
        }
    }
}

/// Lazy file sequence produced by [`PathResolver::resolve`]
pub struct ResolvedPaths {
    pending: VecDeque<Path>,
    scan: Option<glob::Paths>,
    filter: Option<PartitionFilter>,
}

impl ResolvedPaths {
    fn keep(&self, path: &Path) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |filter| filter.keep(&path.partitions()))
    }

    fn start_scan(&mut self, pattern: &str) -> Result<()> {
        debug!("Scanning {}", pattern);
        let paths = glob::glob(pattern).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.scan = Some(paths);
        Ok(())
    }
}

impl Iterator for ResolvedPaths {
    type Item = Result<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(scan) = self.scan.as_mut() {
                match scan.next() {
                    Some(Ok(found)) => {
                        let is_yaml = found
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(is_yaml_extension);
                        if !found.is_file() || !is_yaml {
                            continue;
                        }
                        let path = Path::new(found);
                        if self.keep(&path) {
                            return Some(Ok(path));
                        }
                        debug!("Skipping {} (partition filter)", path);
                        continue;
                    }
                    Some(Err(e)) => return Some(Err(Error::Io(e.into_error()))),
                    None => self.scan = None,
                }
            }

            let next = self.pending.pop_front()?;
            if next.is_pattern() {
                if let Err(e) = self.start_scan(&next.path()) {
                    return Some(Err(e));
                }
            } else if next.as_std().is_dir() {
                let dir = glob::Pattern::escape(&next.path());
                let pattern = format!("{}/**/*", dir.trim_end_matches('/'));
                if let Err(e) = self.start_scan(&pattern) {
                    return Some(Err(e));
                }
            } else if self.keep(&next) {
                return Some(Ok(next));
            }
        }
    }
}
