//! Execution engine module
//!
//! Drives extract, load and the end-of-load signal.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Pipeline` - pulls batches from an extractor into a loader, one at a time
//! - `PipelineConfig` - row limit and wrong-format handling
//! - `PipelineStats` - counters for a finished run

mod types;

pub use types::{PipelineConfig, PipelineStats};

use crate::error::Result;
use crate::extractor::{Extraction, YamlExtractor};
use crate::loader::YamlLoader;
use std::time::Instant;
use tracing::{info, warn};

/// Pipeline for moving records from YAML files into a loader
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pipeline configuration
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run extract and load to completion
    ///
    /// The loader is closed afterwards whether or not the run succeeded. A
    /// run error takes precedence over a close error.
    pub fn run(&self, extractor: &YamlExtractor, loader: &mut YamlLoader) -> Result<PipelineStats> {
        let start = Instant::now();
        let mut stats = PipelineStats::new();
        let mut extraction = extractor.extract();

        let result = self.drive(&mut extraction, loader, &mut stats);
        stats.files_read = extraction.files_read();
        let closed = loader.close();

        #[allow(clippy::cast_possible_truncation)]
        stats.set_duration(start.elapsed().as_millis() as u64);

        result?;
        closed?;

        info!(
            "Loaded {} record(s) from {} file(s) into {} in {}ms",
            stats.records_written,
            stats.files_read,
            loader.destination(),
            stats.duration_ms
        );
        Ok(stats)
    }

    fn drive(
        &self,
        extraction: &mut Extraction,
        loader: &mut YamlLoader,
        stats: &mut PipelineStats,
    ) -> Result<()> {
        loop {
            let remaining = self
                .config
                .limit
                .map(|limit| limit.saturating_sub(stats.records_read));
            if remaining == Some(0) {
                info!("Row limit reached, stopping extraction");
                break;
            }

            let Some(item) = extraction.next() else {
                break;
            };
            let mut batch = match item {
                Ok(batch) => batch,
                Err(e) if e.is_per_file() && self.config.skip_wrong_format => {
                    warn!("Skipping file: {}", e);
                    stats.add_skipped();
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(remaining) = remaining {
                batch.truncate(remaining);
            }
            stats.add_batch(batch.len());
            stats.add_written(loader.load(batch)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
