// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # yamlstream
//!
//! Extract and load adapters that move rows between YAML files and a
//! record-oriented pipeline.
//!
//! ## Features
//!
//! - **Flexible input**: files, directories, glob patterns or lists of them
//! - **Partition filtering**: skip `key=value` directories while scanning
//! - **Lenient shapes**: one mapping, a list of mappings, or several documents per file
//! - **Partitioned output**: Hive-style `col=value/` directories
//! - **Three write disciplines**: whole collection, streaming, append-safe
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yamlstream::dsl::{from, to_with_config};
//! use yamlstream::engine::Pipeline;
//! use yamlstream::{LoaderConfig, WriteDiscipline};
//!
//! fn main() -> yamlstream::Result<()> {
//!     let extractor = from("data/**/*.yml");
//!     let mut loader = to_with_config(
//!         "out/",
//!         LoaderConfig::new()
//!             .with_partition_by(["group"])
//!             .with_discipline(WriteDiscipline::Streaming),
//!     )?;
//!
//!     let stats = Pipeline::new().run(&extractor, &mut loader)?;
//!     println!("{} records written", stats.records_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                 Pipeline  (extract → load → close)               │
//! └──────────────────────────────────────────────────────────────────┘
//!            │                                        │
//! ┌──────────┴──────────────┐          ┌──────────────┴───────────────┐
//! │      YamlExtractor      │          │          YamlLoader          │
//! ├───────────┬─────────────┤          ├───────────┬──────────────────┤
//! │ Path      │ Decode      │          │ Partition │ Output           │
//! ├───────────┼─────────────┤          ├───────────┼──────────────────┤
//! │ Glob      │ Mapping     │          │ Columns   │ WholeCollection  │
//! │ Directory │ List        │          │ k=v dirs  │ Streaming        │
//! │ Filter    │ Multi-doc   │          │           │ AppendSafe       │
//! └───────────┴─────────────┘          └───────────┴──────────────────┘
//!            │                                        │
//! ┌──────────┴────────────────────────────────────────┴──────────────┐
//! │            Stream (FileStream, StreamRegistry) + Codec           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cells, records and batches
pub mod record;

/// Paths, patterns and input resolution
pub mod path;

/// Partition keys, routing and filtering
pub mod partition;

/// File streams and the stream registry
pub mod stream;

/// YAML document codec
pub mod codec;

/// YAML decoders
pub mod decode;

/// YAML writers and destinations
pub mod output;

/// Read side of the façade
pub mod extractor;

/// Write side of the façade
pub mod loader;

/// `from` / `to` entry points
pub mod dsl;

/// Pipeline orchestration
pub mod engine;

/// Job configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use dsl::{from, to};
pub use extractor::YamlExtractor;
pub use loader::{LoaderConfig, YamlLoader};
pub use record::{Cell, Record, RecordBatch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
