//! Tests for extractor module

use super::*;
use crate::error::{Error, Result};
use crate::partition::PartitionFilter;
use crate::record::{Cell, EntryFactory, Record, RecordBatch};
use crate::types::YamlMapping;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn ids(batch: &RecordBatch) -> Vec<i64> {
    batch
        .iter()
        .filter_map(|r| r.get("id").and_then(Cell::as_i64))
        .collect()
}

#[test]
fn test_extract_single_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "data.yml", "- id: 1\n- id: 2\n");

    let batches: Vec<RecordBatch> = YamlExtractor::new(dir.path().join("data.yml"))
        .extract()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(ids(&batches[0]), vec![1, 2]);
    assert_eq!(
        batches[0].source.as_deref(),
        Some(dir.path().join("data.yml").as_path())
    );
}

#[test]
fn test_extract_directory_skips_empty_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", "id: 1\n");
    write(dir.path(), "b.yml", "");
    write(dir.path(), "c.yaml", "[]\n");
    write(dir.path(), "notes.txt", "id: 99\n");

    let mut extraction = YamlExtractor::new(dir.path()).extract();
    let batches: Vec<RecordBatch> = extraction.by_ref().collect::<Result<_>>().unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(ids(&batches[0]), vec![1]);
    assert_eq!(extraction.files_read(), 3);
}

#[test]
fn test_wrong_format_does_not_stop_extraction() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", "just a string\n");
    write(dir.path(), "b.yml", "id: 2\n");

    let items: Vec<Result<RecordBatch>> = YamlExtractor::new(vec![
        dir.path().join("a.yml"),
        dir.path().join("b.yml"),
    ])
    .extract()
    .collect();

    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Err(Error::WrongFormat { .. })));
    assert_eq!(ids(items[1].as_ref().unwrap()), vec![2]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let mut extraction = YamlExtractor::new(dir.path().join("missing.yml")).extract();
    assert!(matches!(extraction.next(), Some(Err(Error::Io(_)))));
    assert!(extraction.next().is_none());
}

#[test]
fn test_extract_with_partition_filter() {
    let dir = tempdir().unwrap();
    write(dir.path(), "group=1/a.yml", "id: 1\n");
    write(dir.path(), "group=2/b.yml", "id: 2\n");
    write(dir.path(), "group=3/c.yml", "id: 3\n");

    let extractor =
        YamlExtractor::new(dir.path()).with_filter(PartitionFilter::new().with("group", ["1", "3"]));
    let mut found: Vec<i64> = extractor
        .extract()
        .flat_map(|batch| ids(&batch.unwrap()))
        .collect();
    found.sort_unstable();

    assert_eq!(found, vec![1, 3]);
}

#[test]
fn test_extract_is_restartable() {
    let dir = tempdir().unwrap();
    write(dir.path(), "data.yml", "id: 1\n");
    let extractor = YamlExtractor::new(dir.path().join("data.yml"));

    assert_eq!(extractor.extract().count(), 1);
    assert_eq!(extractor.extract().count(), 1);
}

struct UpperCaseFactory;

impl EntryFactory for UpperCaseFactory {
    fn create_record(&self, mapping: &YamlMapping) -> Result<Record> {
        let mut record = Record::new();
        for (key, value) in mapping {
            let key = key.as_str().unwrap_or_default().to_uppercase();
            record.insert(key, value.as_str().unwrap_or_default());
        }
        Ok(record)
    }
}

#[test]
fn test_extract_with_custom_factory() {
    let dir = tempdir().unwrap();
    write(dir.path(), "data.yml", "name: Andromeda\n");

    let batch = YamlExtractor::new(dir.path().join("data.yml"))
        .with_factory(Arc::new(UpperCaseFactory))
        .extract()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(
        batch.records[0].get("NAME"),
        Some(&Cell::String("Andromeda".into()))
    );
}
