//! Tests for partition module

use super::*;
use crate::error::Error;
use crate::record::{Cell, Record};
use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use test_case::test_case;

fn row(id: i64, group: impl Into<Cell>) -> Record {
    Record::new().with("id", id).with("group", group)
}

fn ids(group: &PartitionGroup) -> Vec<i64> {
    group
        .records
        .iter()
        .map(|r| r.get("id").and_then(Cell::as_i64).unwrap())
        .collect()
}

// ============================================================================
// PartitionKey Tests
// ============================================================================

#[test]
fn test_partition_key_directory() {
    let key = PartitionKey::new().with("country", "pl").with("group", "1");
    assert_eq!(key.directory(), PathBuf::from("country=pl/group=1"));
    assert_eq!(key.to_string(), "country=pl/group=1");
}

#[test]
fn test_partition_key_from_record() {
    let record = Record::new().with("group", 1).with("country", "pl");
    let key = PartitionKey::from_record(&record, &["country".into(), "group".into()]).unwrap();
    assert_eq!(key, PartitionKey::new().with("country", "pl").with("group", "1"));
}

#[test]
fn test_partition_key_missing_column() {
    let record = Record::new().with("id", 1);
    let err = PartitionKey::from_record(&record, &["group".into()]).unwrap_err();
    assert!(matches!(err, Error::MissingPartitionColumn { ref column } if column == "group"));
}

#[test_case(Cell::Integer(7), "7" ; "integer")]
#[test_case(Cell::Integer(-3), "-3" ; "negative integer")]
#[test_case(Cell::Float(1.5), "1.5" ; "float")]
#[test_case(Cell::Boolean(true), "true" ; "boolean")]
#[test_case(Cell::String("eu".into()), "eu" ; "string")]
fn test_partition_value_formatting(cell: Cell, expected: &str) {
    assert_eq!(partition_value("col", &cell).unwrap(), expected);
}

#[test]
fn test_partition_value_datetime_is_day() {
    let dt = Utc.with_ymd_and_hms(2025, 12, 14, 10, 30, 0).unwrap();
    assert_eq!(partition_value("dt", &Cell::DateTime(dt)).unwrap(), "2025-12-14");
}

#[test]
fn test_same_day_timestamps_share_partition() {
    let at = |day, hour, minute| Utc.with_ymd_and_hms(2025, 12, day, hour, minute, 0).unwrap();
    let records = vec![
        Record::new().with("id", 1).with("dt", Cell::DateTime(at(14, 1, 0))),
        Record::new().with("id", 2).with("dt", Cell::DateTime(at(15, 0, 0))),
        Record::new().with("id", 3).with("dt", Cell::DateTime(at(14, 23, 59))),
    ];

    let groups = ColumnRouter::new(["dt"]).route(records).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.to_string(), "dt=2025-12-14");
    assert_eq!(ids(&groups[0]), vec![1, 3]);
    assert_eq!(groups[1].key.to_string(), "dt=2025-12-15");
    assert_eq!(ids(&groups[1]), vec![2]);
}

#[test_case(Cell::Null ; "null")]
#[test_case(Cell::List(vec![]) ; "list")]
#[test_case(Cell::Map(Record::new()) ; "map")]
#[test_case(Cell::String(String::new()) ; "empty string")]
#[test_case(Cell::String("a/b".into()) ; "slash")]
#[test_case(Cell::String("..".into()) ; "parent dir")]
fn test_partition_value_rejected(cell: Cell) {
    assert!(matches!(
        partition_value("col", &cell),
        Err(Error::InvalidPartitionValue { .. })
    ));
}

// ============================================================================
// Router Tests
// ============================================================================

#[test]
fn test_unpartitioned_single_group() {
    let records = vec![row(1, 1), row(2, 2), row(3, 1)];
    let groups = ColumnRouter::unpartitioned().route(records.clone()).unwrap();

    assert_eq!(groups.len(), 1);
    assert!(groups[0].key.is_empty());
    assert_eq!(groups[0].records, records);
}

#[test]
fn test_route_groups_by_column() {
    let records = vec![row(1, 1), row(2, 1), row(3, 2), row(4, 2)];
    let groups = ColumnRouter::new(["group"]).route(records).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.to_string(), "group=1");
    assert_eq!(ids(&groups[0]), vec![1, 2]);
    assert_eq!(groups[1].key.to_string(), "group=2");
    assert_eq!(ids(&groups[1]), vec![3, 4]);
}

#[test]
fn test_route_is_stable_not_sorted() {
    let records = vec![row(1, "b"), row(2, "a"), row(3, "b"), row(4, "a"), row(5, "c")];
    let groups = ColumnRouter::new(["group"]).route(records).unwrap();

    let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
    assert_eq!(keys, vec!["group=b", "group=a", "group=c"]);
    assert_eq!(ids(&groups[0]), vec![1, 3]);
    assert_eq!(ids(&groups[1]), vec![2, 4]);
    assert_eq!(ids(&groups[2]), vec![5]);
}

#[test]
fn test_route_is_idempotent() {
    let records = vec![row(1, 2), row(2, 1), row(3, 2), row(4, 3)];
    let router = ColumnRouter::new(["group"]);

    let first = router.route(records.clone()).unwrap();
    let second = router.route(records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_route_multiple_columns() {
    let records = vec![
        row(1, 1).with("country", "pl"),
        row(2, 1).with("country", "de"),
        row(3, 1).with("country", "pl"),
    ];
    let groups = ColumnRouter::new(["country", "group"]).route(records).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.to_string(), "country=pl/group=1");
    assert_eq!(ids(&groups[0]), vec![1, 3]);
}

#[test]
fn test_route_integer_and_string_share_partition() {
    let records = vec![row(1, 1), row(2, "1")];
    let groups = ColumnRouter::new(["group"]).route(records).unwrap();
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_route_fails_on_missing_column() {
    let records = vec![row(1, 1), Record::new().with("id", 2)];
    let err = ColumnRouter::new(["group"]).route(records).unwrap_err();
    assert!(matches!(err, Error::MissingPartitionColumn { .. }));
}

#[test]
fn test_router_dedupes_columns() {
    let router = ColumnRouter::new(["a", "b", "a"]);
    assert_eq!(router.partition_columns(), &["a".to_string(), "b".to_string()]);
}

// ============================================================================
// PartitionFilter Tests
// ============================================================================

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_filter_keeps_matching() {
    let filter = PartitionFilter::new().with("group", ["1", "2"]);
    assert!(filter.keep(&pairs(&[("group", "1")])));
    assert!(filter.keep(&pairs(&[("group", "2")])));
    assert!(!filter.keep(&pairs(&[("group", "3")])));
}

#[test]
fn test_filter_ignores_unfiltered_columns() {
    let filter = PartitionFilter::new().with("group", ["1"]);
    assert!(filter.keep(&pairs(&[("country", "pl"), ("group", "1")])));
    assert!(filter.keep(&[]));
}

#[test]
fn test_filter_all_columns_must_match() {
    let filter = PartitionFilter::new()
        .with("group", ["1"])
        .with("country", ["pl"]);
    assert!(!filter.keep(&pairs(&[("country", "de"), ("group", "1")])));
}

#[test]
fn test_filter_from_str() {
    let filter: PartitionFilter = "group=1, 2".parse().unwrap();
    assert_eq!(filter, PartitionFilter::new().with("group", ["1", "2"]));

    assert!("group".parse::<PartitionFilter>().is_err());
    assert!("=1".parse::<PartitionFilter>().is_err());
    assert!("group=".parse::<PartitionFilter>().is_err());
}

#[test]
fn test_filter_merge_and_yaml() {
    let mut filter: PartitionFilter = serde_yaml::from_str("group: ['1']").unwrap();
    filter.merge(PartitionFilter::new().with("group", ["2"]));
    assert_eq!(filter, PartitionFilter::new().with("group", ["1", "2"]));
}
