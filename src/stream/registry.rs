//! Stream registry
//!
//! Open write streams owned by one loader, keyed by destination.

use super::file::{FileStream, Mode};
use crate::error::{Error, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Table of open streams, keyed by destination key
///
/// The key is the unit of reuse: a second `open` with the same key returns
/// the stream opened first, regardless of the file argument.
#[derive(Debug, Default)]
pub struct StreamRegistry {
    streams: HashMap<PathBuf, FileStream>,
}

impl StreamRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stream for `key`, opening `file` with `mode` on first use
    pub fn open(&mut self, key: &Path, file: &Path, mode: Mode) -> Result<&mut FileStream> {
        match self.streams.entry(key.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(FileStream::open(file, mode)?)),
        }
    }

    /// Get an already open stream
    pub fn get_mut(&mut self, key: &Path) -> Result<&mut FileStream> {
        self.streams.get_mut(key).ok_or_else(|| Error::StreamClosed {
            path: key.display().to_string(),
        })
    }

    /// Check if a stream is open for `key`
    pub fn contains(&self, key: &Path) -> bool {
        self.streams.contains_key(key)
    }

    /// Number of open streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Check if no stream is open
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Close one stream; returns false when nothing was open for `key`
    pub fn close(&mut self, key: &Path) -> Result<bool> {
        match self.streams.remove(key) {
            Some(stream) => {
                stream.close()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Close every stream whose key lies under `base`
    ///
    /// All matching streams are closed even if one fails; the first error is
    /// returned.
    pub fn close_all(&mut self, base: &Path) -> Result<usize> {
        let keys: Vec<PathBuf> = self
            .streams
            .keys()
            .filter(|key| key.starts_with(base))
            .cloned()
            .collect();

        let mut first_error = None;
        for key in &keys {
            if let Some(stream) = self.streams.remove(key) {
                if let Err(e) = stream.close() {
                    first_error.get_or_insert(e);
                }
            }
        }
        debug!("Closed {} stream(s) under {}", keys.len(), base.display());

        match first_error {
            Some(e) => Err(e),
            None => Ok(keys.len()),
        }
    }
}
