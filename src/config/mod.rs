//! The declarative processing configuration (`concat_config.yml`).
//!
//! On disk the document is a `codec` string plus a `files` mapping of
//! arbitrary keys to per-file records:
//!
//! ```yaml
//! codec: stream-copy
//! files:
//!   file1:
//!     name: join01__intro.mp4
//!     start: "00:00:10"
//!   file2:
//!     name: join02__main.mp4
//! ```
//!
//! In memory the mapping is an ordered `Vec<ConfigEntry>`: document order is
//! concatenation order, so it must survive the round trip through serde.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StitchResult;
use crate::ffmpeg::profile::EncodingProfile;
use crate::ffmpeg::trim::{EndBound, TrimSpec};

/// Name of the configuration document in the working directory.
pub const CONFIG_FILENAME: &str = "concat_config.yml";

/// Parsed `concat_config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Encoding profile for the concatenation step; stream copy when omitted.
    #[serde(default)]
    pub codec: EncodingProfile,
    /// Files to process, in document order.
    #[serde(
        serialize_with = "serialize_entries",
        deserialize_with = "deserialize_entries"
    )]
    pub files: Vec<ConfigEntry>,
}

/// One configured file with optional trim bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    /// Mapping key the entry was declared under.
    pub key: String,
    /// Input filename, relative to the working directory. Required.
    pub name: String,
    /// Optional trim start timestamp, passed to ffmpeg unvalidated.
    pub start: Option<String>,
    /// Optional trim end timestamp, passed to ffmpeg unvalidated.
    pub end: Option<String>,
}

impl ConfigEntry {
    /// An untrimmed entry for `name` under `key`.
    pub fn untrimmed(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            start: None,
            end: None,
        }
    }

    /// The trim this entry asks for; empty when no bounds are configured.
    pub fn trim_spec(&self) -> TrimSpec {
        TrimSpec {
            start: self.start.clone(),
            end: self.end.clone().map(EndBound::Timestamp),
        }
    }
}

impl ProcessingConfig {
    /// Skeleton configuration for `names`: one untrimmed entry per file,
    /// keyed `file1`, `file2`, … in the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            codec: EncodingProfile::default(),
            files: names
                .iter()
                .enumerate()
                .map(|(i, name)| ConfigEntry::untrimmed(format!("file{}", i + 1), name.as_ref()))
                .collect(),
        }
    }

    /// Load a configuration document from `path`.
    pub fn load(path: &Path) -> StitchResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Serialize and write the document to `path`, overwriting.
    pub fn save(&self, path: &Path) -> StitchResult<()> {
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

/// Wire form of an entry record (the mapping value under each key).
#[derive(Debug, Deserialize)]
struct FileRecord {
    name: String,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
}

/// Borrowed wire form used when writing a document back out.
#[derive(Serialize)]
struct FileRecordRef<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<&'a str>,
}

fn serialize_entries<S>(entries: &[ConfigEntry], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for entry in entries {
        map.serialize_entry(
            &entry.key,
            &FileRecordRef {
                name: &entry.name,
                start: entry.start.as_deref(),
                end: entry.end.as_deref(),
            },
        )?;
    }
    map.end()
}

fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<ConfigEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<ConfigEntry>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of entry keys to file records")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, record)) = access.next_entry::<String, FileRecord>()? {
                entries.push(ConfigEntry {
                    key,
                    name: record.name,
                    start: record.start,
                    end: record.end,
                });
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}
