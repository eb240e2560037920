//! Entry factories
//!
//! Turn decoded YAML mappings into records.

use super::types::{Cell, Record};
use crate::error::{Error, Result};
use crate::types::{YamlMapping, YamlValue};

/// Builds records out of decoded YAML mappings
pub trait EntryFactory: Send + Sync {
    /// Convert one mapping into a record, keeping key order
    fn create_record(&self, mapping: &YamlMapping) -> Result<Record>;
}

/// Maps native YAML nodes onto cells without any coercion
///
/// Integers that don't fit `i64` become floats, mappings become nested
/// records and tags are dropped in favour of the tagged value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEntryFactory;

impl NativeEntryFactory {
    /// Create a new factory
    pub fn new() -> Self {
        Self
    }

    fn cell(&self, value: &YamlValue) -> Result<Cell> {
        Ok(match value {
            YamlValue::Null => Cell::Null,
            YamlValue::Bool(b) => Cell::Boolean(*b),
            YamlValue::Number(n) => match n.as_i64() {
                Some(i) => Cell::Integer(i),
                None => Cell::Float(n.as_f64().ok_or_else(|| {
                    Error::decode(format!("number {n} is out of range"))
                })?),
            },
            YamlValue::String(s) => Cell::String(s.clone()),
            YamlValue::Sequence(items) => Cell::List(
                items
                    .iter()
                    .map(|item| self.cell(item))
                    .collect::<Result<Vec<_>>>()?,
            ),
            YamlValue::Mapping(mapping) => Cell::Map(self.create_record(mapping)?),
            YamlValue::Tagged(tagged) => self.cell(&tagged.value)?,
        })
    }
}

impl EntryFactory for NativeEntryFactory {
    fn create_record(&self, mapping: &YamlMapping) -> Result<Record> {
        let mut record = Record::new();
        for (key, value) in mapping {
            record.insert(field_name(key)?, self.cell(value)?);
        }
        Ok(record)
    }
}

/// Render a mapping key as a field name; only scalar keys are accepted
fn field_name(key: &YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => field_name(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err(Error::decode("mapping keys must be scalars"))
        }
    }
}
