//! Engine types
//!
//! Configuration and statistics for pipeline runs.

use serde::Serialize;

/// Configuration for a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum records to load (None = unlimited)
    pub limit: Option<usize>,
    /// Skip files that fail to decode instead of aborting
    pub skip_wrong_format: bool,
}

impl PipelineConfig {
    /// Create a new pipeline config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set wrong-format skipping
    #[must_use]
    pub fn with_skip_wrong_format(mut self, skip: bool) -> Self {
        self.skip_wrong_format = skip;
        self
    }
}

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Files opened for reading
    pub files_read: usize,
    /// Files skipped because of a wrong format
    pub files_skipped: usize,
    /// Non-empty batches handed to the loader
    pub batches: usize,
    /// Records taken from the extractor, after the limit
    pub records_read: usize,
    /// Records written by the loader
    pub records_written: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl PipelineStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of `records` records
    pub fn add_batch(&mut self, records: usize) {
        self.batches += 1;
        self.records_read += records;
    }

    /// Add written records
    pub fn add_written(&mut self, records: usize) {
        self.records_written += records;
    }

    /// Add a skipped file
    pub fn add_skipped(&mut self) {
        self.files_skipped += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
