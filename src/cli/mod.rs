//! CLI module
//!
//! Command-line interface for reading and copying YAML data.
//!
//! # Commands
//!
//! - `cat` - Print records as JSON lines
//! - `copy` - Copy records into a (partitioned) destination
//! - `run` - Run a copy described by a job file

mod commands;
mod runner;

pub use commands::{Cli, Commands, DisciplineArg};
pub use runner::Runner;
