//! Destination resolution
//!
//! Maps a base path, a partition key and a write discipline onto physical
//! files.

use crate::partition::PartitionKey;
use crate::stream::Mode;
use crate::types::WriteDiscipline;
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Build a Hive-style partitioned directory
///
/// Format: `{base}/{col1}={val1}/{col2}={val2}`
pub fn build_partitioned_dir(base: &Path, key: &PartitionKey) -> PathBuf {
    if key.is_empty() {
        return base.to_path_buf();
    }
    base.join(key.directory())
}

/// Generate a collision-resistant file name
///
/// Format: `{YYYYMMDDHHMMSS}_{uuid}.{ext}`
pub fn generate_file_name(extension: &str) -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let id = Uuid::new_v4().simple();
    format!("{timestamp}_{id}.{extension}")
}

/// Where one partition group of one write call goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    base: PathBuf,
    partition: PartitionKey,
    discipline: WriteDiscipline,
    extension: String,
}

impl Destination {
    /// Create a destination
    pub fn new(
        base: impl AsRef<Path>,
        partition: PartitionKey,
        discipline: WriteDiscipline,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
            partition,
            discipline,
            extension: extension.into(),
        }
    }

    /// The loader's base path
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The partition this destination writes
    pub fn partition(&self) -> &PartitionKey {
        &self.partition
    }

    /// The write discipline
    pub fn discipline(&self) -> WriteDiscipline {
        self.discipline
    }

    /// The single target file, when the discipline writes to the base path itself
    ///
    /// That is the case for unpartitioned whole-collection and streaming writes.
    pub fn fixed_file(&self) -> Option<&Path> {
        if self.partition.is_empty() && !self.discipline.file_per_record() {
            Some(&self.base)
        } else {
            None
        }
    }

    /// Directory holding generated files
    pub fn directory(&self) -> PathBuf {
        build_partitioned_dir(&self.base, &self.partition)
    }

    /// A fresh file inside [`Destination::directory`]
    pub fn generate_file(&self) -> PathBuf {
        self.directory().join(generate_file_name(&self.extension))
    }

    /// The file a whole-collection or streaming write goes to
    ///
    /// The base path when unpartitioned, otherwise a generated file.
    pub fn target_file(&self) -> PathBuf {
        match self.fixed_file() {
            Some(file) => file.to_path_buf(),
            None => self.generate_file(),
        }
    }

    /// Registry key of the shared stream used by streaming writes
    pub fn stream_key(&self) -> PathBuf {
        match self.fixed_file() {
            Some(file) => file.to_path_buf(),
            None => self.directory(),
        }
    }

    /// Whether the stream outlives its group and stays open until the loader closes
    ///
    /// Streaming keys and the fixed file are reused by later writes; a fixed
    /// whole-collection file is truncated once and then gains one document
    /// per write.
    pub fn holds_stream(&self) -> bool {
        self.discipline.keeps_streams_open() || self.fixed_file().is_some()
    }

    /// Open mode for files of this discipline
    pub fn mode(&self) -> Mode {
        match self.discipline {
            WriteDiscipline::WholeCollection => Mode::Write,
            WriteDiscipline::Streaming | WriteDiscipline::AppendSafe => Mode::Append,
        }
    }
}
