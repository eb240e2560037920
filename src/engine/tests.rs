//! Tests for engine module

use super::*;
use crate::error::Error;
use crate::loader::LoaderConfig;
use crate::record::{Cell, RecordBatch};
use crate::types::{WriteDiscipline, YamlValue};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read_sequence(path: &Path) -> Vec<YamlValue> {
    let value: YamlValue = serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value.as_sequence().cloned().unwrap_or_default()
}

// ============================================================================
// PipelineConfig Tests
// ============================================================================

#[test]
fn test_pipeline_config_default() {
    let config = PipelineConfig::default();
    assert_eq!(config.limit, None);
    assert!(!config.skip_wrong_format);
}

#[test]
fn test_pipeline_config_builder() {
    let config = PipelineConfig::new()
        .with_limit(10)
        .with_skip_wrong_format(true);

    assert_eq!(config.limit, Some(10));
    assert!(config.skip_wrong_format);
}

// ============================================================================
// PipelineStats Tests
// ============================================================================

#[test]
fn test_pipeline_stats_counters() {
    let mut stats = PipelineStats::new();
    stats.add_batch(3);
    stats.add_batch(2);
    stats.add_written(5);
    stats.add_skipped();
    stats.set_duration(42);

    assert_eq!(stats.batches, 2);
    assert_eq!(stats.records_read, 5);
    assert_eq!(stats.records_written, 5);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.duration_ms, 42);
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_pipeline_copies_files() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "a.yml", "- id: 1\n- id: 2\n");
    write(input.path(), "b.yml", "id: 3\n");
    let target = output.path().join("all.yml");

    let extractor = YamlExtractor::new(input.path());
    let config = LoaderConfig::new().with_discipline(WriteDiscipline::Streaming);
    let mut loader = YamlLoader::new(&target, config).unwrap();

    let stats = Pipeline::new().run(&extractor, &mut loader).unwrap();

    assert_eq!(stats.files_read, 2);
    assert_eq!(stats.batches, 2);
    assert_eq!(stats.records_written, 3);
    assert_eq!(loader.open_streams(), 0);

    let batch = YamlExtractor::new(&target).extract().next().unwrap().unwrap();
    assert_eq!(batch.len(), 3);
}

#[test]
fn test_pipeline_applies_limit() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "a.yml", "- id: 1\n- id: 2\n");
    write(input.path(), "b.yml", "- id: 3\n- id: 4\n");
    let target = output.path().join("out.yml");

    let mut loader = YamlLoader::new(&target, LoaderConfig::default()).unwrap();
    let stats = Pipeline::new()
        .with_config(PipelineConfig::new().with_limit(1))
        .run(&YamlExtractor::new(input.path()), &mut loader)
        .unwrap();

    assert_eq!(stats.records_written, 1);
    assert_eq!(stats.files_read, 1);
    assert_eq!(read_sequence(&target).len(), 1);
}

#[test]
fn test_pipeline_default_discipline_keeps_every_file() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "a.yml", "- id: 1\n- id: 2\n");
    write(input.path(), "b.yml", "- id: 3\n- id: 4\n");
    let target = output.path().join("out.yml");

    let mut loader = YamlLoader::new(&target, LoaderConfig::default()).unwrap();
    let stats = Pipeline::new()
        .run(&YamlExtractor::new(input.path()), &mut loader)
        .unwrap();

    assert_eq!(stats.files_read, 2);
    assert_eq!(stats.records_written, 4);
    assert_eq!(loader.open_streams(), 0);

    let ids: Vec<i64> = YamlExtractor::new(&target)
        .extract()
        .map(|batch| batch.unwrap())
        .flat_map(RecordBatch::into_records)
        .filter_map(|record| record.get("id").and_then(Cell::as_i64))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_pipeline_fails_on_wrong_format_and_closes() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "a.yml", "id: 1\n");
    write(input.path(), "b.yml", "42\n");
    let target = output.path().join("out.yml");

    let extractor = YamlExtractor::new(vec![input.path().join("a.yml"), input.path().join("b.yml")]);
    let config = LoaderConfig::new().with_discipline(WriteDiscipline::Streaming);
    let mut loader = YamlLoader::new(&target, config).unwrap();

    let err = Pipeline::new().run(&extractor, &mut loader).unwrap_err();
    assert!(matches!(err, Error::WrongFormat { .. }));
    assert_eq!(loader.open_streams(), 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "---\nid: 1\n");
}

#[test]
fn test_pipeline_skips_wrong_format() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "a.yml", "id: 1\n");
    write(input.path(), "b.yml", "[1, 2, 3]\n");
    write(input.path(), "c.yml", "id: 3\n");
    let target = output.path().join("out");

    let config = LoaderConfig::new().with_discipline(WriteDiscipline::AppendSafe);
    let mut loader = YamlLoader::new(&target, config).unwrap();
    let stats = Pipeline::new()
        .with_config(PipelineConfig::new().with_skip_wrong_format(true))
        .run(&YamlExtractor::new(input.path()), &mut loader)
        .unwrap();

    assert_eq!(stats.files_read, 3);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.records_written, 2);
    assert_eq!(fs::read_dir(&target).unwrap().count(), 2);
}
