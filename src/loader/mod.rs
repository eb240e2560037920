//! Loader module
//!
//! Write side of the façade.
//!
//! # Overview
//!
//! The loader module provides:
//! - `LoaderConfig` - partition columns, write discipline, file extension
//! - `YamlLoader` - routes records into partition groups and writes them,
//!   owning the streams it opens until `close()`
//!
//! A loader destination is never a glob pattern; construction fails with
//! `InvalidDestination` instead.

mod sink;
mod types;

pub use sink::YamlLoader;
pub use types::LoaderConfig;
