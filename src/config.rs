//! Job configuration
//!
//! A job file describes one copy run: where to read, where and how to
//! write, and how the pipeline behaves.
//!
//! ```yaml
//! source:
//!   paths: [data/, extra/*.yml]
//!   partition_filter:
//!     group: ["1", "2"]
//! destination:
//!   path: out/
//!   partition_by: [group]
//!   discipline: streaming
//! limit: 1000
//! skip_wrong_format: false
//! ```
//!
//! Relative paths are resolved against the current directory.

use crate::engine::PipelineConfig;
use crate::error::{Error, Result};
use crate::extractor::YamlExtractor;
use crate::loader::{LoaderConfig, YamlLoader};
use crate::partition::PartitionFilter;
use crate::path::{Path, PathInput};
use crate::types::{WriteDiscipline, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

// ============================================================================
// Top-Level Job Config
// ============================================================================

/// Complete job configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Where records are read from
    pub source: SourceConfig,

    /// Where records are written to
    pub destination: DestinationConfig,

    /// Maximum records to copy
    #[serde(default)]
    pub limit: Option<usize>,

    /// Skip unreadable files instead of failing the job
    #[serde(default)]
    pub skip_wrong_format: bool,
}

impl JobConfig {
    /// Load and validate a job file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read job file '{}': {e}", path.display()))
        })?;
        content.parse()
    }

    /// Check the configuration for values no run could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.source.paths.is_empty() {
            return Err(Error::config("Job must have at least one source path"));
        }
        if self.source.paths.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::config("Source paths cannot be empty"));
        }
        if self.destination.path.trim().is_empty() {
            return Err(Error::config("Destination path cannot be empty"));
        }

        let columns = &self.destination.partition_by;
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(Error::config("Partition column names cannot be empty"));
        }
        let unique: HashSet<_> = columns.iter().collect();
        if unique.len() != columns.len() {
            return Err(Error::config("Duplicate partition columns found"));
        }

        if self.limit == Some(0) {
            return Err(Error::config("Limit must be greater than zero"));
        }
        Ok(())
    }

    /// Build the extractor for the source section
    pub fn extractor(&self) -> YamlExtractor {
        let input: PathInput = self
            .source
            .paths
            .iter()
            .map(|p| Path::from(p.as_str()))
            .collect::<Vec<_>>()
            .into();
        let extractor = YamlExtractor::new(input);
        match &self.source.partition_filter {
            Some(filter) if !filter.is_empty() => extractor.with_filter(filter.clone()),
            _ => extractor,
        }
    }

    /// Build the loader for the destination section
    pub fn loader(&self) -> Result<YamlLoader> {
        YamlLoader::new(
            self.destination.path.as_str(),
            self.destination.loader_config(),
        )
    }

    /// Pipeline settings of the job
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            limit: self.limit,
            skip_wrong_format: self.skip_wrong_format,
        }
    }
}

impl FromStr for JobConfig {
    type Err = Error;

    fn from_str(yaml: &str) -> Result<Self> {
        let config: JobConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse job YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Source
// ============================================================================

/// Source section of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Files, directories or patterns, read in order
    pub paths: Vec<String>,

    /// Allowed partition values per column
    #[serde(default)]
    pub partition_filter: Option<PartitionFilter>,
}

// ============================================================================
// Destination
// ============================================================================

/// Destination section of a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Base path; a file for unpartitioned writes, otherwise a directory
    pub path: String,

    /// Partition columns, outermost directory first
    #[serde(default)]
    pub partition_by: Vec<String>,

    /// Write discipline
    #[serde(default)]
    pub discipline: WriteDiscipline,

    /// Extension of generated file names
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl DestinationConfig {
    /// Loader settings of this destination
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new()
            .with_partition_by(self.partition_by.iter().cloned())
            .with_discipline(self.discipline)
            .with_extension(self.extension.as_str())
    }
}
