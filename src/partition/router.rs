//! Column based partition router
//!
//! Groups records by the values of the declared partition columns.

use super::types::{PartitionGroup, PartitionKey, PartitionRouter};
use crate::error::Result;
use crate::record::Record;
use std::collections::HashMap;

/// Routes records by a list of partition columns
///
/// Grouping is a stable partition: distinct keys keep first-seen order and
/// records keep their relative order within a group.
#[derive(Debug, Clone, Default)]
pub struct ColumnRouter {
    columns: Vec<String>,
}

impl ColumnRouter {
    /// Create a router; repeated column names are kept once
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        Self { columns: unique }
    }

    /// Router that puts everything into one group
    pub fn unpartitioned() -> Self {
        Self::default()
    }
}

impl PartitionRouter for ColumnRouter {
    fn route(&self, records: Vec<Record>) -> Result<Vec<PartitionGroup>> {
        if self.columns.is_empty() {
            return Ok(vec![PartitionGroup::new(PartitionKey::new(), records)]);
        }

        let mut groups: Vec<PartitionGroup> = Vec::new();
        let mut index: HashMap<PartitionKey, usize> = HashMap::new();

        for record in records {
            let key = PartitionKey::from_record(&record, &self.columns)?;
            match index.get(&key) {
                Some(&i) => groups[i].records.push(record),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(PartitionGroup::new(key, vec![record]));
                }
            }
        }

        Ok(groups)
    }

    fn partition_columns(&self) -> &[String] {
        &self.columns
    }
}
