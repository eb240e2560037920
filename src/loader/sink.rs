//! YAML loader

use super::types::LoaderConfig;
use crate::error::{Error, Result};
use crate::output::{Destination, YamlWriter};
use crate::partition::{ColumnRouter, PartitionRouter};
use crate::path::Path;
use crate::record::Record;
use crate::stream::StreamRegistry;
use tracing::debug;

/// Writes records under a base path
///
/// Owns every stream it opens. Streaming writes and an unpartitioned
/// whole-collection file keep their streams open across `load` calls until
/// [`YamlLoader::close`], so each call adds to the file instead of replacing
/// it. Generated files are released at the end of each partition group.
#[derive(Debug)]
pub struct YamlLoader {
    destination: Path,
    config: LoaderConfig,
    router: ColumnRouter,
    writer: YamlWriter,
    streams: StreamRegistry,
}

impl YamlLoader {
    /// Create a loader; a pattern destination is rejected
    pub fn new(destination: impl Into<Path>, config: LoaderConfig) -> Result<Self> {
        let destination = destination.into();
        if destination.is_pattern() {
            return Err(Error::invalid_destination(destination.path()));
        }
        Ok(Self {
            router: ColumnRouter::new(config.partition_by.iter().cloned()),
            destination,
            config,
            writer: YamlWriter::new(),
            streams: StreamRegistry::new(),
        })
    }

    /// The base path records are written under
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// The loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Number of streams currently held open
    pub fn open_streams(&self) -> usize {
        self.streams.len()
    }

    /// Write records; returns the number of records written
    ///
    /// An empty input writes nothing. Partition keys are computed for every
    /// record before the first write, so a record missing a partition column
    /// fails the call with nothing written.
    pub fn load<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = Record>,
    {
        let records: Vec<Record> = records.into_iter().collect();
        if records.is_empty() {
            debug!("Nothing to load into {}", self.destination);
            return Ok(0);
        }

        let groups = self.router.route(records)?;
        let discipline = self.config.discipline;
        let mut written = 0;

        for group in &groups {
            let destination = Destination::new(
                &self.destination,
                group.key.clone(),
                discipline,
                self.config.extension.as_str(),
            );
            let outcome = self
                .writer
                .write_group(group, &destination, &mut self.streams)?;
            if !destination.holds_stream() {
                for key in &outcome.keys {
                    self.streams.close(key)?;
                }
            }
            written += outcome.records;
        }

        debug!(
            "Loaded {} record(s) in {} group(s) into {}",
            written,
            groups.len(),
            self.destination
        );
        Ok(written)
    }

    /// Close every stream opened under the base path
    ///
    /// This is the end-of-load signal; returns the number of streams closed.
    pub fn close(&mut self) -> Result<usize> {
        self.streams.close_all(self.destination.as_std())
    }
}
