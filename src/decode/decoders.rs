//! Decoder implementations

use super::types::{DocumentShape, RecordDecoder};
use crate::codec::YamlCodec;
use crate::error::{Error, Result};
use crate::record::{EntryFactory, NativeEntryFactory, RecordBatch};
use crate::stream::FileStream;
use std::sync::Arc;
use tracing::debug;

/// YAML decoder producing one batch per file
///
/// Every document in the file is shape-checked; records of all documents end
/// up in a single batch, in document order.
#[derive(Clone)]
pub struct YamlDecoder {
    codec: YamlCodec,
    factory: Arc<dyn EntryFactory>,
}

impl Default for YamlDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlDecoder {
    /// Create a decoder using [`NativeEntryFactory`]
    pub fn new() -> Self {
        Self::with_factory(Arc::new(NativeEntryFactory::new()))
    }

    /// Create a decoder with a custom entry factory
    pub fn with_factory(factory: Arc<dyn EntryFactory>) -> Self {
        Self {
            codec: YamlCodec::new(),
            factory,
        }
    }
}

impl std::fmt::Debug for YamlDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YamlDecoder").finish_non_exhaustive()
    }
}

impl RecordDecoder for YamlDecoder {
    fn decode(&self, stream: &mut FileStream) -> Result<Option<RecordBatch>> {
        let path = stream.path().display().to_string();
        let bytes = stream.read_to_end()?;

        let documents = self
            .codec
            .decode_documents(&bytes)
            .map_err(|e| Error::wrong_format(&path, e.to_string()))?;

        let mut records = Vec::new();
        for document in documents {
            let shape =
                DocumentShape::classify(document).map_err(|msg| Error::wrong_format(&path, msg))?;
            for mapping in shape.into_mappings() {
                let record = self
                    .factory
                    .create_record(&mapping)
                    .map_err(|e| Error::wrong_format(&path, e.to_string()))?;
                records.push(record);
            }
        }

        debug!("Decoded {} record(s) from {}", records.len(), path);
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(RecordBatch::new(records).with_source(stream.path())))
    }
}
