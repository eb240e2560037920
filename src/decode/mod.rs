//! Decoder module
//!
//! Turns YAML files into record batches.
//!
//! # Overview
//!
//! A file may hold one mapping (one record), a list of mappings, several
//! `---` separated documents of either kind, or nothing at all. Anything
//! else is a `WrongFormat` error naming the file.

mod decoders;
mod types;

pub use decoders::YamlDecoder;
pub use types::{DocumentShape, RecordDecoder};
