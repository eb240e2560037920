//! YAML extractor

use crate::decode::{RecordDecoder, YamlDecoder};
use crate::error::Result;
use crate::partition::PartitionFilter;
use crate::path::{Path, PathInput, PathResolver, ResolvedPaths};
use crate::record::{EntryFactory, RecordBatch};
use crate::stream::{FileStream, Mode};
use std::sync::Arc;
use tracing::debug;

/// Reads record batches from YAML files
#[derive(Debug, Clone)]
pub struct YamlExtractor {
    input: PathInput,
    resolver: PathResolver,
    decoder: YamlDecoder,
}

impl YamlExtractor {
    /// Create an extractor using the native entry factory
    pub fn new(input: impl Into<PathInput>) -> Self {
        Self {
            input: input.into(),
            resolver: PathResolver::new(),
            decoder: YamlDecoder::new(),
        }
    }

    /// Only read files whose partitions pass the filter
    #[must_use]
    pub fn with_filter(mut self, filter: PartitionFilter) -> Self {
        self.resolver = self.resolver.with_filter(filter);
        self
    }

    /// Build records with a custom entry factory
    #[must_use]
    pub fn with_factory(mut self, factory: Arc<dyn EntryFactory>) -> Self {
        self.decoder = YamlDecoder::with_factory(factory);
        self
    }

    /// The configured inputs
    pub fn input(&self) -> &PathInput {
        &self.input
    }

    /// Resolve the inputs without reading them
    pub fn paths(&self) -> ResolvedPaths {
        self.resolver.resolve(&self.input)
    }

    /// Start a lazy extraction
    ///
    /// Nothing is read until the first `next()`. Every call starts over from
    /// the first input.
    pub fn extract(&self) -> Extraction {
        Extraction {
            paths: self.paths(),
            decoder: self.decoder.clone(),
            files_read: 0,
        }
    }
}

/// Lazy sequence of decoded batches
///
/// Empty files are skipped. A file that fails to decode yields an error item
/// and the following `next()` moves on to the next file.
pub struct Extraction {
    paths: ResolvedPaths,
    decoder: YamlDecoder,
    files_read: usize,
}

impl Extraction {
    /// Files opened so far
    pub fn files_read(&self) -> usize {
        self.files_read
    }

    fn read_file(&mut self, path: &Path) -> Result<Option<RecordBatch>> {
        let mut stream = FileStream::open(path, Mode::Read)?;
        self.files_read += 1;
        let decoded = self.decoder.decode(&mut stream);
        stream.close()?;
        decoded
    }
}

impl Iterator for Extraction {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.paths.next()? {
                Ok(path) => path,
                Err(e) => return Some(Err(e)),
            };
            match self.read_file(&path) {
                Ok(Some(batch)) => return Some(Ok(batch)),
                Ok(None) => debug!("Skipping empty file {}", path),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl std::fmt::Debug for Extraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extraction")
            .field("files_read", &self.files_read)
            .finish_non_exhaustive()
    }
}
