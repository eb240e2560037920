//! File streams
//!
//! An open handle bound to one file and one access mode.

use crate::error::{Error, Result};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Access mode of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Read the whole file
    Read,
    /// Truncate, then write
    Write,
    /// Append, creating the file when missing
    Append,
}

enum Handle {
    Reader(File),
    Writer(BufWriter<File>),
}

/// An open file handle
///
/// Writers are buffered; [`FileStream::close`] flushes and reports errors.
/// Dropping an unclosed stream still releases the handle.
pub struct FileStream {
    path: PathBuf,
    mode: Mode,
    handle: Handle,
    bytes_written: u64,
}

impl FileStream {
    /// Open a file; parent directories are created for write modes
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let handle = match mode {
            Mode::Read => Handle::Reader(File::open(&path)?),
            Mode::Write | Mode::Append => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        create_dir_all(parent)?;
                    }
                }
                let mut options = OpenOptions::new();
                options.create(true);
                if mode == Mode::Write {
                    options.write(true).truncate(true);
                } else {
                    options.append(true);
                }
                Handle::Writer(BufWriter::new(options.open(&path)?))
            }
        };
        debug!("Opened {} ({:?})", path.display(), mode);

        Ok(Self {
            path,
            mode,
            handle,
            bytes_written: 0,
        })
    }

    /// The file this stream is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The access mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Bytes written through this handle so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write bytes at the current position
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        match &mut self.handle {
            Handle::Writer(writer) => {
                writer.write_all(bytes)?;
                self.bytes_written += bytes.len() as u64;
                Ok(())
            }
            Handle::Reader(_) => Err(Error::Other(format!(
                "Stream {} is opened for reading",
                self.path.display()
            ))),
        }
    }

    /// Read the remaining content
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        match &mut self.handle {
            Handle::Reader(file) => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)?;
                Ok(buf)
            }
            Handle::Writer(_) => Err(Error::Other(format!(
                "Stream {} is opened for writing",
                self.path.display()
            ))),
        }
    }

    /// Flush pending bytes and release the handle
    pub fn close(self) -> Result<()> {
        if let Handle::Writer(mut writer) = self.handle {
            writer.flush()?;
        }
        debug!("Closed {}", self.path.display());
        Ok(())
    }
}

impl std::fmt::Debug for FileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStream")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("bytes_written", &self.bytes_written)
            .finish_non_exhaustive()
    }
}
