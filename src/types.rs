//! Common types used throughout yamlstream
//!
//! This module contains shared type definitions, type aliases,
//! and constants used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic YAML tree (re-exported from serde_yaml)
pub type YamlValue = serde_yaml::Value;

/// YAML mapping type, keeps insertion order
pub type YamlMapping = serde_yaml::Mapping;

// ============================================================================
// Constants
// ============================================================================

/// Extension used for generated file names unless configured otherwise
pub const DEFAULT_EXTENSION: &str = "yml";

/// File extensions picked up when scanning directories and patterns
pub const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

// ============================================================================
// Write Discipline
// ============================================================================

/// How a group of records is turned into file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteDiscipline {
    /// One sequence document per group; the target file is truncated when first opened
    #[default]
    WholeCollection,
    /// One document per record, appended to a single stream per group
    Streaming,
    /// One document per record, each in its own uniquely named file
    AppendSafe,
}

impl WriteDiscipline {
    /// Whether the discipline keeps its stream open across groups and `load` calls
    pub fn keeps_streams_open(self) -> bool {
        matches!(self, Self::Streaming)
    }

    /// Whether every record gets a file of its own
    pub fn file_per_record(self) -> bool {
        matches!(self, Self::AppendSafe)
    }

    /// Stable name used in logs and configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WholeCollection => "whole_collection",
            Self::Streaming => "streaming",
            Self::AppendSafe => "append_safe",
        }
    }
}

impl std::fmt::Display for WriteDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a file extension belongs to a YAML file
pub fn is_yaml_extension(extension: &str) -> bool {
    YAML_EXTENSIONS
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(extension))
}
