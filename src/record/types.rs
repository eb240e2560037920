//! Record types
//!
//! A `Record` is an ordered list of uniquely named cells. Records read from the
//! same file may carry different field sets.

use crate::error::{Error, Result};
use crate::types::{YamlMapping, YamlValue};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

// ============================================================================
// Cell
// ============================================================================

/// A typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing / null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Point in time, written as an RFC 3339 string
    DateTime(DateTime<Utc>),
    /// Raw bytes; has no YAML representation
    Binary(Vec<u8>),
    /// Ordered list of cells
    List(Vec<Cell>),
    /// Nested structure with named fields
    Map(Record),
}

impl Cell {
    /// Short name of the cell variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Boolean(_) => "boolean",
            Cell::Integer(_) => "integer",
            Cell::Float(_) => "float",
            Cell::String(_) => "string",
            Cell::DateTime(_) => "datetime",
            Cell::Binary(_) => "binary",
            Cell::List(_) => "list",
            Cell::Map(_) => "map",
        }
    }

    /// Check if the cell is null
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Get the string value, if this is a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer cell
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(f) => Some(*f),
            Cell::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean cell
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert into a YAML node; `field` names the cell in errors
    pub(crate) fn to_native(&self, field: &str) -> Result<YamlValue> {
        Ok(match self {
            Cell::Null => YamlValue::Null,
            Cell::Boolean(b) => YamlValue::Bool(*b),
            Cell::Integer(i) => YamlValue::Number((*i).into()),
            Cell::Float(f) => YamlValue::Number((*f).into()),
            Cell::String(s) => YamlValue::String(s.clone()),
            Cell::DateTime(dt) => {
                YamlValue::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Cell::Binary(_) => return Err(Error::unsupported_cell(field, self.type_name())),
            Cell::List(items) => YamlValue::Sequence(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| item.to_native(&format!("{field}[{i}]")))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Cell::Map(record) => YamlValue::Mapping(record.to_native_in(Some(field))?),
        })
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(value: DateTime<Utc>) -> Self {
        Cell::DateTime(value)
    }
}

impl From<Vec<Cell>> for Cell {
    fn from(value: Vec<Cell>) -> Self {
        Cell::List(value)
    }
}

impl From<Record> for Cell {
    fn from(value: Record) -> Self {
        Cell::Map(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_unit(),
            Cell::Boolean(b) => serializer.serialize_bool(*b),
            Cell::Integer(i) => serializer.serialize_i64(*i),
            Cell::Float(f) => serializer.serialize_f64(*f),
            Cell::String(s) => serializer.serialize_str(s),
            Cell::DateTime(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Cell::Binary(bytes) => serializer.serialize_bytes(bytes),
            Cell::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Cell::Map(record) => record.serialize(serializer),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// An ordered mapping from field name to cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Cell)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing an existing one in place
    ///
    /// Returns the previous value when the field already existed.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Cell>) -> Option<Cell> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Check whether a field exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a field, keeping the order of the remaining ones
    pub fn remove(&mut self, name: &str) -> Option<Cell> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Field names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, cell)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a YAML mapping with the same field order
    pub fn to_native(&self) -> Result<YamlMapping> {
        self.to_native_in(None)
    }

    fn to_native_in(&self, parent: Option<&str>) -> Result<YamlMapping> {
        let mut mapping = YamlMapping::new();
        for (name, cell) in &self.entries {
            let field = match parent {
                Some(parent) => format!("{parent}.{name}"),
                None => name.clone(),
            };
            mapping.insert(YamlValue::String(name.clone()), cell.to_native(&field)?);
        }
        Ok(mapping)
    }
}

impl FromIterator<(String, Cell)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, cell) in iter {
            record.insert(name, cell);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Cell);
    type IntoIter = std::vec::IntoIter<(String, Cell)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, cell) in &self.entries {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

// ============================================================================
// RecordBatch
// ============================================================================

/// Records decoded from one source file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch {
    /// File the records were read from
    pub source: Option<PathBuf>,
    /// Records in document order
    pub records: Vec<Record>,
}

impl RecordBatch {
    /// Create a batch without a source file
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    /// Attach the source file
    #[must_use]
    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the batch holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Keep only the first `len` records
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }

    /// Take the records out of the batch
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl IntoIterator for RecordBatch {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
