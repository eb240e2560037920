//! Output module
//!
//! Turns partition groups into YAML files.
//!
//! # Overview
//!
//! This module provides:
//! - `Destination` - base path + partition key + discipline, resolved to files
//! - `YamlWriter` - whole-collection, streaming and append-safe writes
//! - Hive-style `col=value/` directory naming

mod destination;
mod writer;

pub use destination::{build_partitioned_dir, generate_file_name, Destination};
pub use writer::{WriteOutcome, YamlWriter};
