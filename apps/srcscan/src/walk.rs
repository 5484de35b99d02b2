//! Recursive file enumeration under the scan root.
//!
//! Entries are visited depth-first and sorted by name inside each directory,
//! so report order is stable across runs. Symlinks are followed. Any
//! unreadable entry aborts the walk; there is no partial result.

use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every regular file reachable from `root`.
///
/// A missing `root` yields an empty list rather than an error. A `root` that
/// exists but is not a directory is fatal.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
