//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use crate::record::RecordBatch;
use crate::stream::FileStream;
use crate::types::{YamlMapping, YamlValue};

/// Top-level shape of one decoded document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentShape {
    /// Null, empty mapping or empty sequence
    Empty,
    /// A single mapping, promoted to a one-record batch
    Single(YamlMapping),
    /// A sequence of mappings, one record each
    Many(Vec<YamlMapping>),
}

impl DocumentShape {
    /// Classify a decoded document
    ///
    /// Scalars and sequences holding anything but mappings are rejected with
    /// a description of what was found.
    pub fn classify(value: YamlValue) -> std::result::Result<Self, String> {
        match value {
            YamlValue::Null => Ok(Self::Empty),
            YamlValue::Mapping(m) if m.is_empty() => Ok(Self::Empty),
            YamlValue::Mapping(m) => Ok(Self::Single(m)),
            YamlValue::Sequence(items) if items.is_empty() => Ok(Self::Empty),
            YamlValue::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    YamlValue::Mapping(m) => Ok(m),
                    other => Err(format!(
                        "expected a list of mappings, item {i} is {}",
                        describe(&other)
                    )),
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Self::Many),
            YamlValue::Tagged(tagged) => {
                let tagged = *tagged;
                Self::classify(tagged.value)
            }
            other => Err(format!(
                "expected a mapping or a list of mappings, found {}",
                describe(&other)
            )),
        }
    }

    /// The mappings carried by this document
    pub fn into_mappings(self) -> Vec<YamlMapping> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(m) => vec![m],
            Self::Many(items) => items,
        }
    }
}

/// Describe a YAML node kind for error messages
fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a list",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}

/// Trait for decoding one open file into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the whole stream into at most one batch
    ///
    /// `Ok(None)` means the file is legitimately empty; malformed content
    /// must be reported as an error, never as an empty result.
    fn decode(&self, stream: &mut FileStream) -> Result<Option<RecordBatch>>;
}
