//! Path module
//!
//! Resolution of user supplied locations into concrete files.
//!
//! # Overview
//!
//! - `Path` - file, directory or glob pattern, with `key=value` partition parsing
//! - `PathInput` - one or many paths handed to an extractor
//! - `PathResolver` - lazy, filter-aware expansion into files

mod resolver;
mod types;

pub use resolver::{PathResolver, ResolvedPaths};
pub use types::{Path, PathInput};
