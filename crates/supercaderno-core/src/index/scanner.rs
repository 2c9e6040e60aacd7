//! Recursive PDF discovery

use crate::error::{Result, SupercadernoError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan `root` recursively for PDF files (extension match,
/// case-insensitive), sorted by full path for reproducibility.
///
/// An empty directory yields an empty vec. A root that does not exist or
/// is not a directory is an input error. Unreadable entries below the root
/// are skipped, not fatal.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SupercadernoError::InvalidInput(format!(
            "Input path is not a directory: {}",
            root.display()
        )));
    }

    let mut pdfs = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        {
            pdfs.push(path.to_path_buf());
        }
    }

    pdfs.sort();
    Ok(pdfs)
}
