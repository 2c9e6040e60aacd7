//! Content-addressable result cache
//!
//! One JSON file per key under a storage root. The key is derived from
//! the semantic inputs of a generation call, so each unique input
//! combination is computed at most once when the real model client lands.
//! The cache is advisory throughout: any read or write failure degrades
//! to "recompute", never aborts a run.

use crate::error::{Result, SupercadernoError};
use crate::hash::sha256_hex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Cached generation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub text: String,
    pub meta: Value,
}

/// Derive the storage key for a generation call.
///
/// The prompt text is fingerprinted first, then the key hashes the full
/// input tuple. Every argument participates; changing any one of them
/// changes the key.
pub fn make_key(
    model: &str,
    temperature: f32,
    safety: &str,
    prompt_text: &str,
    app_version: &str,
) -> String {
    let prompt_fingerprint = sha256_hex(prompt_text);
    sha256_hex(&format!(
        "{model}|{temperature}|{safety}|{prompt_fingerprint}|v{app_version}"
    ))
}

/// On-disk cache, shared across runs. Constructed once with its storage
/// root and passed by reference to whatever needs it.
pub struct ResultCache {
    root: PathBuf,
}

impl ResultCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Look up a record. A missing, unreadable or corrupt file is a miss.
    pub fn get(&self, key: &str) -> Option<CacheRecord> {
        let path = self.record_path(key);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Corrupt cache record {:?}, treating as miss: {}", path, e);
                None
            }
        }
    }

    /// Persist a record under `key`, last write wins.
    ///
    /// The record is written to a temporary file in the storage root and
    /// renamed over the final path, so concurrent readers see either the
    /// old complete record or the new one, never a partial write.
    pub fn set(&self, key: &str, text: &str, meta: Value) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.record_path(key);
        let record = CacheRecord {
            text: text.to_string(),
            meta,
        };

        let mut tmp = NamedTempFile::new_in(&self.root)?;
        serde_json::to_writer_pretty(&mut tmp, &record)?;
        tmp.flush()?;
        tmp.persist(&path)
            .map_err(|e| SupercadernoError::Io(e.error))?;
        Ok(path)
    }
}
