//! Greek dictionary file model and I/O.
//!
//! The source document maps Strong's-style lemma keys to entry objects. The
//! output contract fixes the order of the known fields (struct declaration
//! order below) and appends any unknown fields afterwards in their source
//! order; top-level entries keep their source order as well.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

use anyhow::Context as _;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type Dictionary = IndexMap<String, Entry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strongs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grego: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteracao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocorrencia: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traducao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desgram: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    /// Entries whose part-of-speech code starts with "V" are verbs.
    pub fn is_verb(&self) -> bool {
        self.classegram
            .as_deref()
            .is_some_and(|code| code.starts_with('V'))
    }
}

pub fn load_dictionary(path: &Path) -> anyhow::Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dictionary file {}", path.display()))?;
    let dictionary = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dictionary JSON in {}", path.display()))?;
    Ok(dictionary)
}

pub fn write_dictionary(path: &Path, dictionary: &Dictionary) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dictionary)
        .with_context(|| format!("Failed to serialize dictionary to {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry_json() -> &'static str {
        r#"{
            "strongs": "G25",
            "grego": "ἀγαπάω",
            "verbete": "G25: amar, estimar",
            "classegram": "V",
            "desgram": "Verbo - Ativa Indicativo Presente - 1ª Pessoa Singular",
            "nota": "uso joanino"
        }"#
    }

    #[test]
    fn test_entry_round_trip_keeps_known_fields_in_order() {
        let entry: Entry = serde_json::from_str(sample_entry_json()).unwrap();
        assert_eq!(entry.grego.as_deref(), Some("ἀγαπάω"));
        assert!(entry.is_verb());
        assert_eq!(entry.extra["nota"], "uso joanino");

        let serialized = serde_json::to_string(&entry).unwrap();
        let strongs = serialized.find("\"strongs\"").unwrap();
        let verbete = serialized.find("\"verbete\"").unwrap();
        let classegram = serialized.find("\"classegram\"").unwrap();
        let nota = serialized.find("\"nota\"").unwrap();
        assert!(strongs < verbete);
        assert!(verbete < classegram);
        // Unknown keys land after every known one.
        assert!(classegram < nota);
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let entry: Entry = serde_json::from_str(r#"{"grego": "καί"}"#).unwrap();
        let serialized = serde_json::to_string(&entry).unwrap();
        assert!(!serialized.contains("traducao"));
        assert!(!serialized.contains("desgram"));
        assert!(!entry.is_verb());
    }

    #[test]
    fn test_dictionary_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");

        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "agapao".to_string(),
            serde_json::from_str(sample_entry_json()).unwrap(),
        );
        dictionary.insert(
            "kai".to_string(),
            serde_json::from_str(r#"{"grego": "καί", "classegram": "Conj"}"#).unwrap(),
        );

        write_dictionary(&path, &dictionary).unwrap();
        let reloaded = load_dictionary(&path).unwrap();
        assert_eq!(reloaded, dictionary);
        let keys: Vec<_> = reloaded.keys().collect();
        assert_eq!(keys, vec!["agapao", "kai"]);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        // UTF-8 stays unescaped on disk.
        assert!(text.contains("ἀγαπάω"));
    }

    #[test]
    fn test_load_missing_file_surfaces_error() {
        let err = load_dictionary(Path::new("/nonexistent/dict.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
