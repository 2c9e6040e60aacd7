//! Manifest building and principal-document resolution

use super::PRINCIPAL_MARKERS;
use crate::extract::page_count;
use crate::hash::sha256_file;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered document. Identity is `content_hash`, stable across
/// renames and moves; the other metadata fields are best-effort and may
/// be absent for documents the filesystem refused to read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentManifestEntry {
    pub path: PathBuf,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Resolve the principal script among sorted discovery results.
///
/// Three-tier resolution: an explicit hint matching a file name wins;
/// otherwise the first name carrying a principal marker token; otherwise
/// the largest file. An empty set has no principal, which is a condition
/// for the caller to report, not an error.
pub fn choose_principal<'a>(paths: &'a [PathBuf], hint: Option<&str>) -> Option<&'a Path> {
    if let Some(hint) = hint {
        if let Some(found) = paths.iter().find(|p| file_name(p) == hint) {
            return Some(found);
        }
    }

    for path in paths {
        let name = file_name(path).to_lowercase();
        if PRINCIPAL_MARKERS.iter().any(|m| name.contains(m)) {
            return Some(path);
        }
    }

    paths
        .iter()
        .max_by_key(|p| fs::metadata(p).map(|m| m.len()).unwrap_or(0))
        .map(|p| p.as_path())
}

/// Build a manifest entry per document.
///
/// Size, whole-file hash and page count are each best-effort; a document
/// that fails any of them still gets an entry with path and name, and one
/// bad document never aborts the batch.
pub fn build_manifest(paths: &[PathBuf]) -> Vec<DocumentManifestEntry> {
    paths
        .iter()
        .map(|path| {
            let size_bytes = fs::metadata(path).map(|m| m.len()).ok();
            let content_hash = match sha256_file(path) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::warn!("Could not hash {:?}: {}", path, e);
                    None
                }
            };
            DocumentManifestEntry {
                path: path.clone(),
                name: file_name(path),
                size_bytes,
                content_hash,
                page_count: page_count(path),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![b'x'; len]).unwrap();
        path
    }

    #[test]
    fn test_principal_hint_wins() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            touch(dir.path(), "aula1.pdf", 10),
            touch(dir.path(), "aula2.pdf", 9000),
            touch(dir.path(), "roteiro_principal.pdf", 5),
        ];

        let chosen = choose_principal(&paths, Some("aula1.pdf")).unwrap();
        assert!(chosen.ends_with("aula1.pdf"));
    }

    #[test]
    fn test_principal_marker_beats_size() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            touch(dir.path(), "aula1.pdf", 9000),
            touch(dir.path(), "roteiro_principal.pdf", 5),
        ];

        let chosen = choose_principal(&paths, None).unwrap();
        assert!(chosen.ends_with("roteiro_principal.pdf"));
    }

    #[test]
    fn test_principal_falls_back_to_largest() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            touch(dir.path(), "aula1.pdf", 10),
            touch(dir.path(), "aula2.pdf", 9000),
        ];

        let chosen = choose_principal(&paths, None).unwrap();
        assert!(chosen.ends_with("aula2.pdf"));
    }

    #[test]
    fn test_principal_empty_set() {
        assert!(choose_principal(&[], None).is_none());
        assert!(choose_principal(&[], Some("roteiro.pdf")).is_none());
    }

    #[test]
    fn test_unmatched_hint_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            touch(dir.path(), "aula1.pdf", 10),
            touch(dir.path(), "roteiro.pdf", 5),
        ];

        let chosen = choose_principal(&paths, Some("missing.pdf")).unwrap();
        assert!(chosen.ends_with("roteiro.pdf"));
    }

    #[test]
    fn test_manifest_survives_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = touch(dir.path(), "aula1.pdf", 64);
        let gone = dir.path().join("removed.pdf");
        let entries = build_manifest(&[good, gone.clone()]);

        assert_eq!(entries.len(), 2);
        assert!(entries[0].content_hash.is_some());
        assert_eq!(entries[0].size_bytes, Some(64));

        let bad = &entries[1];
        assert_eq!(bad.name, "removed.pdf");
        assert!(bad.size_bytes.is_none());
        assert!(bad.content_hash.is_none());
        assert!(bad.page_count.is_none());
    }

    #[test]
    fn test_manifest_hash_is_stable_across_rename() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.pdf", 256);
        let renamed = dir.path().join("b.pdf");
        let first = build_manifest(std::slice::from_ref(&a));
        fs::rename(&a, &renamed).unwrap();
        let second = build_manifest(&[renamed]);

        assert_eq!(first[0].content_hash, second[0].content_hash);
    }
}
