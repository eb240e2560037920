//! YAML document codec
//!
//! Thin wrapper over `serde_yaml` with an explicit delimiter convention:
//! a full document is `---\n<body>...\n`, a fragment is the bare body.

use crate::error::Result;
use crate::types::YamlValue;
use serde::Deserialize;

/// Document start marker
pub const DOCUMENT_START: &str = "---";

/// Document end marker
pub const DOCUMENT_END: &str = "...";

/// Stateless YAML encoder/decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Create a codec
    pub fn new() -> Self {
        Self
    }

    /// Decode every document of a YAML stream
    ///
    /// An empty input yields no documents; an explicitly empty document
    /// decodes to `Null`.
    pub fn decode_documents(&self, bytes: &[u8]) -> std::result::Result<Vec<YamlValue>, serde_yaml::Error> {
        serde_yaml::Deserializer::from_slice(bytes)
            .map(YamlValue::deserialize)
            .collect()
    }

    /// Encode a node without document markers
    pub fn encode_fragment(&self, value: &YamlValue) -> Result<String> {
        let encoded = serde_yaml::to_string(value)?;
        Ok(strip_markers(&encoded).to_string())
    }

    /// Encode a node as a standalone document with start and end markers
    pub fn encode_document(&self, value: &YamlValue) -> Result<String> {
        let fragment = self.encode_fragment(value)?;
        Ok(format!("{DOCUMENT_START}\n{fragment}{DOCUMENT_END}\n"))
    }

    /// Encode a node as one entry of a multi-document stream
    ///
    /// Only the start marker is emitted, so consecutive entries concatenate
    /// into a valid stream.
    pub fn encode_stream_entry(&self, value: &YamlValue) -> Result<String> {
        let fragment = self.encode_fragment(value)?;
        Ok(format!("{DOCUMENT_START}\n{fragment}"))
    }
}

/// Drop a leading `---` line and a trailing `...` line, if present
fn strip_markers(encoded: &str) -> &str {
    let mut body = encoded;
    if let Some(rest) = body.strip_prefix(DOCUMENT_START) {
        if let Some(rest) = rest.strip_prefix('\n') {
            body = rest;
        }
    }
    let end_line = format!("{DOCUMENT_END}\n");
    if let Some(rest) = body.strip_suffix(end_line.as_str()) {
        if rest.is_empty() || rest.ends_with('\n') {
            body = rest;
        }
    }
    body
}

/// Split a multi-document stream on `---` lines
///
/// Returns the raw text of each non-empty document, in order.
pub fn split_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();
    for line in content.lines() {
        if line == DOCUMENT_START || line == DOCUMENT_END {
            if !current.trim().is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            current.clear();
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    if !current.trim().is_empty() {
        documents.push(current);
    }
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::YamlMapping;

    fn record(id: i64, name: &str) -> YamlValue {
        let mut m = YamlMapping::new();
        m.insert("id".into(), id.into());
        m.insert("name".into(), name.into());
        YamlValue::Mapping(m)
    }

    #[test]
    fn test_encode_fragment_has_no_markers() {
        let fragment = YamlCodec::new().encode_fragment(&record(1, "Andromeda")).unwrap();
        assert_eq!(fragment, "id: 1\nname: Andromeda\n");
    }

    #[test]
    fn test_encode_document_sequence() {
        let value = YamlValue::Sequence(vec![record(1, "Andromeda"), record(2, "Milkyway")]);
        let doc = YamlCodec::new().encode_document(&value).unwrap();
        assert_eq!(
            doc,
            "---\n- id: 1\n  name: Andromeda\n- id: 2\n  name: Milkyway\n...\n"
        );
    }

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("---\na: 1\n...\n"), "a: 1\n");
        assert_eq!(strip_markers("a: 1\n"), "a: 1\n");
        assert_eq!(strip_markers("--- a\n"), "--- a\n");
    }

    #[test]
    fn test_decode_documents() {
        let codec = YamlCodec::new();
        let docs = codec.decode_documents(b"---\na: 1\n---\na: 2\n").unwrap();
        assert_eq!(docs.len(), 2);

        let docs = codec.decode_documents(b"").unwrap();
        assert!(docs.iter().all(YamlValue::is_null));
    }

    #[test]
    fn test_decode_documents_error() {
        assert!(YamlCodec::new().decode_documents(b"a: [1, 2\n").is_err());
    }

    #[test]
    fn test_stream_entries_split_back() {
        let codec = YamlCodec::new();
        let stream: String = (1..=3)
            .map(|i| codec.encode_stream_entry(&record(i, "x")).unwrap())
            .collect();

        let docs = split_documents(&stream);
        assert_eq!(docs.len(), 3);
        for (i, doc) in docs.iter().enumerate() {
            let value: YamlValue = serde_yaml::from_str(doc).unwrap();
            assert_eq!(value, record(i as i64 + 1, "x"));
        }
    }
}
