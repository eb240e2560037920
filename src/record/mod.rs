//! Record module
//!
//! The uniform row model shared by the extract and load sides.
//!
//! # Overview
//!
//! - `Cell` - tagged cell value (integer, float, string, boolean, null, nested)
//! - `Record` - ordered, uniquely named cells
//! - `RecordBatch` - the records decoded from one file
//! - `EntryFactory` - converts decoded YAML mappings into records

mod factory;
mod types;

pub use factory::{EntryFactory, NativeEntryFactory};
pub use types::{Cell, Record, RecordBatch};
