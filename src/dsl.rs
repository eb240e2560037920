//! Entry points
//!
//! ```no_run
//! use yamlstream::dsl::{from, to};
//!
//! # fn main() -> yamlstream::Result<()> {
//! let mut loader = to("out/galaxies.yml")?;
//! for batch in from("data/*.yml").extract() {
//!     loader.load(batch?)?;
//! }
//! loader.close()?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::extractor::YamlExtractor;
use crate::loader::{LoaderConfig, YamlLoader};
use crate::path::{Path, PathInput};
use crate::record::EntryFactory;
use std::sync::Arc;

/// Read from a file, directory, pattern or list of them
pub fn from(input: impl Into<PathInput>) -> YamlExtractor {
    YamlExtractor::new(input)
}

/// Read with a custom entry factory
pub fn from_with_factory(
    input: impl Into<PathInput>,
    factory: Arc<dyn EntryFactory>,
) -> YamlExtractor {
    YamlExtractor::new(input).with_factory(factory)
}

/// Write unpartitioned whole collections to `path`
pub fn to(path: impl Into<Path>) -> Result<YamlLoader> {
    YamlLoader::new(path, LoaderConfig::default())
}

/// Write to `path` with an explicit configuration
pub fn to_with_config(path: impl Into<Path>, config: LoaderConfig) -> Result<YamlLoader> {
    YamlLoader::new(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::{Cell, Record};
    use crate::types::WriteDiscipline;
    use tempfile::tempdir;

    #[test]
    fn test_to_rejects_pattern() {
        assert!(matches!(
            to("out/*.yml"),
            Err(Error::InvalidDestination { .. })
        ));
    }

    #[test]
    fn test_from_to_roundtrip() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.yml");
        let records = vec![
            Record::new().with("id", 1).with("name", "Andromeda"),
            Record::new().with("id", 2).with("name", "Milkyway"),
        ];

        let mut loader = to_with_config(
            &target,
            LoaderConfig::new().with_discipline(WriteDiscipline::Streaming),
        )
        .unwrap();
        loader.load(records.clone()).unwrap();
        loader.close().unwrap();

        let batch = from(&target).extract().next().unwrap().unwrap();
        assert_eq!(batch.records, records);
        assert_eq!(batch.records[1].get("name"), Some(&Cell::from("Milkyway")));
    }
}
