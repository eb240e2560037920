//! Error types for yamlstream
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for yamlstream
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Path / Destination Errors
    // ============================================================================
    #[error("Loader path can't be pattern, given: {path}")]
    InvalidDestination { path: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("File '{path}' is not a valid YAML record file: {message}")]
    WrongFormat { path: String, message: String },

    #[error("Failed to decode entry: {message}")]
    Decode { message: String },

    // ============================================================================
    // Partition Errors
    // ============================================================================
    #[error("Record is missing partition column: {column}")]
    MissingPartitionColumn { column: String },

    #[error("Invalid value for partition column '{column}': {message}")]
    InvalidPartitionValue { column: String, message: String },

    // ============================================================================
    // Encode Errors
    // ============================================================================
    #[error("Field '{field}' holds a {cell_type} value which YAML can't represent")]
    UnsupportedCellType { field: String, cell_type: String },

    #[error("Record {position} has no fields and would read back as no record")]
    EmptyRecord { position: usize },

    #[error("Stream already closed: {path}")]
    StreamClosed { path: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid destination error
    pub fn invalid_destination(path: impl Into<String>) -> Self {
        Self::InvalidDestination { path: path.into() }
    }

    /// Create a wrong format error for the given file
    pub fn wrong_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WrongFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing partition column error
    pub fn missing_partition_column(column: impl Into<String>) -> Self {
        Self::MissingPartitionColumn {
            column: column.into(),
        }
    }

    /// Create an invalid partition value error
    pub fn invalid_partition_value(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPartitionValue {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported cell type error
    pub fn unsupported_cell(field: impl Into<String>, cell_type: impl Into<String>) -> Self {
        Self::UnsupportedCellType {
            field: field.into(),
            cell_type: cell_type.into(),
        }
    }

    /// Create an empty record error for the record at `position`
    pub fn empty_record(position: usize) -> Self {
        Self::EmptyRecord { position }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error only concerns a single input file
    ///
    /// Orchestrators may keep pulling from an extraction after such an error.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Error::WrongFormat { .. })
    }
}

/// Result type alias for yamlstream
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
