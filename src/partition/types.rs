//! Partition types and traits
//!
//! Defines the core partition abstractions.

use crate::error::{Error, Result};
use crate::record::{Cell, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// Partition Key
// ============================================================================

/// Ordered `(column, value)` pairs identifying a partition
///
/// Two records share a partition iff their keys are equal pair for pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pairs: Vec<(String, String)>,
}

impl PartitionKey {
    /// Create an empty key (no partitioning)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, builder style
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((column.into(), value.into()));
        self
    }

    /// Compute the key of a record for the given columns
    pub fn from_record(record: &Record, columns: &[String]) -> Result<Self> {
        let mut key = Self::new();
        for column in columns {
            let cell = record
                .get(column)
                .ok_or_else(|| Error::missing_partition_column(column))?;
            key.pairs
                .push((column.clone(), partition_value(column, cell)?));
        }
        Ok(key)
    }

    /// The pairs in declaration order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Check if this is the empty key
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Relative directory: `col1=val1/col2=val2`
    pub fn directory(&self) -> PathBuf {
        self.pairs
            .iter()
            .map(|(column, value)| format!("{column}={value}"))
            .collect()
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = self
            .pairs
            .iter()
            .map(|(column, value)| format!("{column}={value}"))
            .collect();
        f.write_str(&segments.join("/"))
    }
}

/// Render a cell as a directory-safe partition value
///
/// Scalars use their natural formatting, so `Integer(7)` and `String("7")`
/// land in the same directory. Datetimes are truncated to the day.
pub fn partition_value(column: &str, cell: &Cell) -> Result<String> {
    let value = match cell {
        Cell::Integer(i) => i.to_string(),
        Cell::Float(f) => f.to_string(),
        Cell::Boolean(b) => b.to_string(),
        Cell::String(s) => s.clone(),
        Cell::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
        Cell::Null | Cell::Binary(_) | Cell::List(_) | Cell::Map(_) => {
            return Err(Error::invalid_partition_value(
                column,
                format!("{} values can't be used as partitions", cell.type_name()),
            ))
        }
    };

    if value.is_empty() {
        return Err(Error::invalid_partition_value(column, "empty value"));
    }
    if value.contains(['/', '\\', '=']) || value == "." || value == ".." {
        return Err(Error::invalid_partition_value(
            column,
            format!("'{value}' is not a valid directory name"),
        ));
    }
    Ok(value)
}

// ============================================================================
// Partition Group
// ============================================================================

/// Records sharing one partition key, in original relative order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionGroup {
    /// The shared key
    pub key: PartitionKey,
    /// Records of the group
    pub records: Vec<Record>,
}

impl PartitionGroup {
    /// Create a group
    pub fn new(key: PartitionKey, records: Vec<Record>) -> Self {
        Self { key, records }
    }

    /// Number of records in the group
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the group holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Partition Filter
// ============================================================================

/// Allowed values per partition column, applied while scanning
///
/// A path is rejected when one of its `key=value` directories names a
/// filtered column with a value outside the allowed set. Columns absent from
/// the path don't reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionFilter {
    allowed: BTreeMap<String, BTreeSet<String>>,
}

impl PartitionFilter {
    /// Create a filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the given values for a column
    #[must_use]
    pub fn with<I, V>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allowed
            .entry(column.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Check if the filter has no constraints
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Merge another filter into this one
    pub fn merge(&mut self, other: PartitionFilter) {
        for (column, values) in other.allowed {
            self.allowed.entry(column).or_default().extend(values);
        }
    }

    /// Decide whether a path with these partitions is kept
    pub fn keep(&self, partitions: &[(String, String)]) -> bool {
        partitions.iter().all(|(column, value)| {
            self.allowed
                .get(column)
                .map_or(true, |values| values.contains(value))
        })
    }
}

impl FromStr for PartitionFilter {
    type Err = Error;

    /// Parse `column=value1,value2`
    fn from_str(s: &str) -> Result<Self> {
        let (column, values) = s
            .split_once('=')
            .ok_or_else(|| Error::config(format!("Partition filter must be column=values, given: {s}")))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(Error::config(format!("Partition filter has no column: {s}")));
        }
        let values: Vec<&str> = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return Err(Error::config(format!("Partition filter has no values: {s}")));
        }
        Ok(Self::new().with(column, values))
    }
}

// ============================================================================
// Router Trait
// ============================================================================

/// Trait for partition routers
pub trait PartitionRouter: Send + Sync {
    /// Split records into groups, one per distinct partition key
    fn route(&self, records: Vec<Record>) -> Result<Vec<PartitionGroup>>;

    /// The partition columns, in declaration order
    fn partition_columns(&self) -> &[String];
}
