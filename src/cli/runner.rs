//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::JobConfig;
use crate::engine::{Pipeline, PipelineConfig, PipelineStats};
use crate::error::Result;
use crate::extractor::YamlExtractor;
use crate::loader::{LoaderConfig, YamlLoader};
use crate::partition::PartitionFilter;
use crate::path::{Path, PathInput};
use anyhow::Context;
use std::io::{self, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Cat {
                paths,
                filter,
                limit,
            } => self.cat(paths, filter, *limit),
            Commands::Copy {
                paths,
                to,
                partition_by,
                discipline,
                extension,
                filter,
                limit,
                skip_wrong_format,
            } => {
                let loader_config = LoaderConfig::new()
                    .with_partition_by(partition_by.iter().cloned())
                    .with_discipline((*discipline).into())
                    .with_extension(extension.as_str());
                let mut pipeline_config =
                    PipelineConfig::new().with_skip_wrong_format(*skip_wrong_format);
                if let Some(limit) = limit {
                    pipeline_config = pipeline_config.with_limit(*limit);
                }
                self.copy(paths, filter, to, loader_config, pipeline_config)
            }
            Commands::Run { job } => {
                let config = JobConfig::from_file(job)
                    .with_context(|| format!("Failed to load job {}", job.display()))?;
                let mut loader = config.loader()?;
                let stats = Pipeline::new()
                    .with_config(config.pipeline_config())
                    .run(&config.extractor(), &mut loader)?;
                print_stats(&stats)
            }
        }
    }

    /// Print records as JSON lines
    fn cat(&self, paths: &[String], filters: &[PartitionFilter], limit: Option<usize>) -> Result<()> {
        let extractor = build_extractor(paths, filters);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut printed = 0;

        for batch in extractor.extract() {
            for record in batch? {
                if limit.is_some_and(|limit| printed >= limit) {
                    return Ok(());
                }
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
                printed += 1;
            }
        }
        Ok(())
    }

    /// Copy records into a destination
    fn copy(
        &self,
        paths: &[String],
        filters: &[PartitionFilter],
        to: &str,
        loader_config: LoaderConfig,
        pipeline_config: PipelineConfig,
    ) -> Result<()> {
        let extractor = build_extractor(paths, filters);
        let mut loader = YamlLoader::new(to, loader_config)
            .with_context(|| format!("Invalid destination {to}"))?;

        info!(
            "Copying into {} ({})",
            loader.destination(),
            loader.config().discipline
        );
        let stats = Pipeline::new()
            .with_config(pipeline_config)
            .run(&extractor, &mut loader)?;
        print_stats(&stats)
    }
}

/// Build an extractor for CLI paths and filters
fn build_extractor(paths: &[String], filters: &[PartitionFilter]) -> YamlExtractor {
    let input: PathInput = paths
        .iter()
        .map(|p| Path::from(p.as_str()))
        .collect::<Vec<_>>()
        .into();

    let mut filter = PartitionFilter::new();
    for f in filters {
        filter.merge(f.clone());
    }

    let extractor = YamlExtractor::new(input);
    if filter.is_empty() {
        extractor
    } else {
        extractor.with_filter(filter)
    }
}

/// Print run statistics as one JSON line
fn print_stats(stats: &PipelineStats) -> Result<()> {
    println!("{}", serde_json::to_string(stats)?);
    Ok(())
}

