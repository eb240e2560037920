//! YAML record writer
//!
//! Serializes partition groups under one of three write disciplines.

use super::destination::Destination;
use crate::codec::YamlCodec;
use crate::error::{Error, Result};
use crate::partition::PartitionGroup;
use crate::stream::StreamRegistry;
use crate::types::{WriteDiscipline, YamlValue};
use std::path::PathBuf;
use tracing::debug;

/// Outcome of writing one group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Registry keys of the streams written to
    pub keys: Vec<PathBuf>,
    /// Records written
    pub records: usize,
    /// Bytes written
    pub bytes: u64,
}

/// Writes partition groups as YAML
///
/// Streams are taken from the caller's registry and never closed here.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlWriter {
    codec: YamlCodec,
}

impl YamlWriter {
    /// Create a writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one group to its destination
    ///
    /// Every record is converted before the first byte is written, so a
    /// record with an unsupported cell or with no fields at all leaves the
    /// group's files untouched.
    pub fn write_group(
        &self,
        group: &PartitionGroup,
        destination: &Destination,
        streams: &mut StreamRegistry,
    ) -> Result<WriteOutcome> {
        let mappings = group
            .records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                if record.is_empty() {
                    return Err(Error::empty_record(position));
                }
                record.to_native().map(YamlValue::Mapping)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut outcome = WriteOutcome {
            records: mappings.len(),
            ..WriteOutcome::default()
        };

        match destination.discipline() {
            WriteDiscipline::WholeCollection => {
                let file = destination.target_file();
                let bytes = self
                    .codec
                    .encode_document(&YamlValue::Sequence(mappings))?;
                streams
                    .open(&file, &file, destination.mode())?
                    .write(bytes.as_bytes())?;
                outcome.bytes += bytes.len() as u64;
                outcome.keys.push(file);
            }
            WriteDiscipline::Streaming => {
                let key = destination.stream_key();
                let stream = if streams.contains(&key) {
                    streams.get_mut(&key)?
                } else {
                    streams.open(&key, &destination.target_file(), destination.mode())?
                };
                for mapping in &mappings {
                    let bytes = self.codec.encode_stream_entry(mapping)?;
                    stream.write(bytes.as_bytes())?;
                    outcome.bytes += bytes.len() as u64;
                }
                outcome.keys.push(key);
            }
            WriteDiscipline::AppendSafe => {
                for mapping in &mappings {
                    let file = destination.generate_file();
                    let bytes = self.codec.encode_document(mapping)?;
                    streams
                        .open(&file, &file, destination.mode())?
                        .write(bytes.as_bytes())?;
                    outcome.bytes += bytes.len() as u64;
                    outcome.keys.push(file);
                }
            }
        }

        debug!(
            "Wrote {} record(s) to {} ({}, partition '{}')",
            outcome.records,
            destination.directory().display(),
            destination.discipline(),
            destination.partition()
        );
        Ok(outcome)
    }
}
