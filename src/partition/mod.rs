//! Partition routing module
//!
//! Splits a record stream into `key=value` partitions and filters
//! partitioned inputs.
//!
//! # Overview
//!
//! - `PartitionKey` - ordered `(column, value)` pairs, rendered as `col=val/...`
//! - `PartitionRouter` / `ColumnRouter` - stable grouping by partition columns
//! - `PartitionFilter` - allowed values per column, used when scanning inputs

mod router;
mod types;

pub use router::ColumnRouter;
pub use types::{
    partition_value, PartitionFilter, PartitionGroup, PartitionKey, PartitionRouter,
};

#[cfg(test)]
mod tests;
