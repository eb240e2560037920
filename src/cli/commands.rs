//! CLI commands and argument parsing

use crate::partition::PartitionFilter;
use crate::types::{WriteDiscipline, DEFAULT_EXTENSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Partitioned YAML reader and writer
#[derive(Parser, Debug)]
#[command(name = "yamlstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print records as JSON, one per line
    Cat {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Partition filter, e.g. `group=1,2` (repeatable)
        #[arg(long)]
        filter: Vec<PartitionFilter>,

        /// Maximum records to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Copy records into a destination
    Copy {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Destination file or directory
        #[arg(long)]
        to: String,

        /// Partition column (repeatable, outermost first)
        #[arg(long)]
        partition_by: Vec<String>,

        /// Write discipline
        #[arg(long, value_enum, default_value = "whole-collection")]
        discipline: DisciplineArg,

        /// Extension of generated file names
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        extension: String,

        /// Partition filter, e.g. `group=1,2` (repeatable)
        #[arg(long)]
        filter: Vec<PartitionFilter>,

        /// Maximum records to copy
        #[arg(long)]
        limit: Option<usize>,

        /// Skip files that are not a mapping or a list of mappings
        #[arg(long)]
        skip_wrong_format: bool,
    },

    /// Run a job file
    Run {
        /// Job definition file (YAML)
        #[arg(short, long)]
        job: PathBuf,
    },
}

/// Write discipline argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisciplineArg {
    /// One sequence document per partition
    WholeCollection,
    /// One document per record, appended to a shared file per partition
    Streaming,
    /// One file per record
    AppendSafe,
}

impl From<DisciplineArg> for WriteDiscipline {
    fn from(value: DisciplineArg) -> Self {
        match value {
            DisciplineArg::WholeCollection => WriteDiscipline::WholeCollection,
            DisciplineArg::Streaming => WriteDiscipline::Streaming,
            DisciplineArg::AppendSafe => WriteDiscipline::AppendSafe,
        }
    }
}
