//! Loader configuration

use crate::types::{WriteDiscipline, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};

/// How a loader lays records out on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
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

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            partition_by: Vec::new(),
            discipline: WriteDiscipline::default(),
            extension: default_extension(),
        }
    }
}

impl LoaderConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set partition columns
    #[must_use]
    pub fn with_partition_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_by = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set write discipline
    #[must_use]
    pub fn with_discipline(mut self, discipline: WriteDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Set extension of generated files (without the dot)
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Check if records are split into partition directories
    pub fn is_partitioned(&self) -> bool {
        !self.partition_by.is_empty()
    }
}
