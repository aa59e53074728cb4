// src/storage/metadata.rs
// =============================================================================
// The metadata index: which file holds which URL, when it was scraped and
// how many links it had.
//
// On disk it is one pretty-printed JSON object:
//
//   {
//     "index.html": {
//       "url": "https://example.org/",
//       "scrapedAt": "2024-05-01T12:00:00.000Z",
//       "linksFound": 12
//     }
//   }
//
// The whole map lives in memory during a crawl. Entries from earlier runs are
// loaded first, so a run only adds to (or overwrites) what is already there.
// flush() writes the full map to a temporary file and renames it over the
// real one, so a crash mid-write never leaves half a JSON document behind.
//
// Rust concepts:
// - BTreeMap: Sorted keys give a stable, diff-friendly file
// - serde rename_all: Rust's snake_case fields become camelCase JSON keys
// =============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Provenance of one saved page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub url: String,
    #[serde(with = "iso_timestamp")]
    pub scraped_at: DateTime<Utc>,
    pub links_found: usize,
}

impl PageMetadata {
    pub fn now(url: impl Into<String>, links_found: usize) -> Self {
        Self {
            url: url.into(),
            scraped_at: Utc::now(),
            links_found,
        }
    }
}

#[derive(Debug)]
pub struct MetadataIndex {
    path: PathBuf,
    entries: BTreeMap<String, PageMetadata>,
    dirty: bool,
}

impl MetadataIndex {
    /// Loads the index at `path`. A missing file is an empty index; a file
    /// that exists but is not valid JSON is an error, so we never silently
    /// throw away an earlier run's records.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Metadata index {} is not valid JSON", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read metadata index {}", path.display()))
            }
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds an entry; an existing entry with the same file name is replaced.
    pub fn record(&mut self, filename: impl Into<String>, entry: PageMetadata) {
        self.entries.insert(filename.into(), entry);
        self.dirty = true;
    }

    pub fn get(&self, filename: &str) -> Option<&PageMetadata> {
        self.entries.get(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the index if anything changed since the last flush.
    pub async fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.entries)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        self.dirty = false;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "Flushed metadata index");
        Ok(())
    }
}

// Millisecond-precision "Z" timestamps, the same shape browsers produce
// with Date.prototype.toISOString
mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
