//! Extractor module
//!
//! Read side of the façade: resolves inputs and decodes them file by file.
//!
//! # Overview
//!
//! - `YamlExtractor` - input paths + resolver + decoder
//! - `Extraction` - lazy sequence of `Result<RecordBatch>`, one per non-empty file
//!
//! Each file is opened, decoded and closed inside a single `next()` call, so
//! no handle outlives the item that produced it.

mod reader;

pub use reader::{Extraction, YamlExtractor};

#[cfg(test)]
mod tests;
