//! Language manifest loading.
//!
//! The manifest is a JSON array of objects, one per language:
//!
//! ```json
//! [
//!   {"lang": "de", "marmot-indexes": "form-index=0,tag-index=4", "cis-path": "de/train.txt"}
//! ]
//! ```
//!
//! Keys other than the three below are ignored. Only the top-level array is
//! checked on load; each record is decoded when the batch reaches it, so a
//! record missing a field fails at that point and not before.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Extension MarMoT model files are written with
pub const MODEL_EXTENSION: &str = "marmot";

/// One language's manifest record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub lang: String,
    #[serde(rename = "marmot-indexes")]
    pub marmot_indexes: String,
    #[serde(rename = "cis-path")]
    pub cis_path: String,
}

impl LanguageEntry {
    /// Value for MarMoT's `-train-file` option: `<marmot-indexes>,<cis-path>`
    pub fn training_input(&self) -> String {
        format!("{},{}", self.marmot_indexes, self.cis_path)
    }

    /// `<lang>.marmot`, inside `dir` when one is given
    pub fn model_file(&self, dir: Option<&Path>) -> PathBuf {
        let name = format!("{}.{}", self.lang, MODEL_EXTENSION);
        match dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Manifest records in file order, not yet decoded
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// File the records came from; used to label errors
    pub path: PathBuf,
    pub records: Vec<Value>,
}

impl Manifest {
    /// Parse manifest text. The top level must be an array.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let records: Vec<Value> =
            serde_json::from_str(text).map_err(|source| Error::ConfigMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Read and parse the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&text, path)?;
        debug!("Loaded {} manifest records from {:?}", manifest.len(), path);
        Ok(manifest)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode one record into a `LanguageEntry`
    pub fn entry(&self, record: &Value) -> Result<LanguageEntry> {
        LanguageEntry::deserialize(record).map_err(|source| Error::ConfigMalformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Decode every record, failing on the first malformed one
    pub fn entries(&self) -> Result<Vec<LanguageEntry>> {
        self.records.iter().map(|r| self.entry(r)).collect()
    }
}

/// The `lang` of a raw record, when it has a string one
pub fn record_lang(record: &Value) -> Option<&str> {
    record.get("lang").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"lang": "en", "marmot-indexes": "idx", "cis-path": "cis"},
        {"lang": "de", "marmot-indexes": "form-index=0,tag-index=4", "cis-path": "de.txt", "note": "ignored"}
    ]"#;

    fn sample() -> Vec<LanguageEntry> {
        Manifest::parse(SAMPLE, Path::new("data.json"))
            .unwrap()
            .entries()
            .unwrap()
    }

    #[test]
    fn parses_entries_in_order() {
        let entries = sample();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lang, "en");
        assert_eq!(entries[1].lang, "de");
        assert_eq!(entries[1].cis_path, "de.txt");
    }

    #[test]
    fn training_input_joins_with_comma() {
        let entries = sample();
        assert_eq!(entries[0].training_input(), "idx,cis");
        assert_eq!(
            entries[1].training_input(),
            "form-index=0,tag-index=4,de.txt"
        );
    }

    #[test]
    fn model_file_is_named_after_language() {
        let entries = sample();
        assert_eq!(entries[0].model_file(None), PathBuf::from("en.marmot"));
        assert_eq!(
            entries[1].model_file(Some(Path::new("models"))),
            PathBuf::from("models/de.marmot")
        );
    }

    #[test]
    fn missing_field_only_fails_its_own_record() {
        let text = r#"[
            {"lang": "en", "marmot-indexes": "idx", "cis-path": "cis"},
            {"lang": "de", "marmot-indexes": "idx"}
        ]"#;
        let manifest = Manifest::parse(text, Path::new("data.json")).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.entry(&manifest.records[0]).unwrap().lang, "en");
        assert_eq!(record_lang(&manifest.records[1]), Some("de"));

        match manifest.entry(&manifest.records[1]).unwrap_err() {
            Error::ConfigMalformed { path, source } => {
                assert_eq!(path, PathBuf::from("data.json"));
                assert!(source.to_string().contains("cis-path"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn top_level_object_is_malformed() {
        let text = r#"{"lang": "en", "marmot-indexes": "idx", "cis-path": "cis"}"#;
        let err = Manifest::parse(text, Path::new("data.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigMalformed { .. }));
    }

    #[test]
    fn record_lang_requires_a_string() {
        let records: Vec<Value> =
            serde_json::from_str(r#"[{"lang": 3}, {}, {"lang": "cs"}]"#).unwrap();
        assert_eq!(record_lang(&records[0]), None);
        assert_eq!(record_lang(&records[1]), None);
        assert_eq!(record_lang(&records[2]), Some("cs"));
    }

    #[test]
    fn load_reads_file_and_reports_missing_file_as_io() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.path, path);

        let err = Manifest::load(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
