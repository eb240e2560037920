//! Stream module
//!
//! File handles and the per-loader table of open destinations.
//!
//! # Overview
//!
//! - `FileStream` - one open file with a `Mode` (read, write, append)
//! - `StreamRegistry` - open write streams keyed by destination, closed
//!   together on the end-of-load signal

mod file;
mod registry;

pub use file::{FileStream, Mode};
pub use registry::StreamRegistry;
