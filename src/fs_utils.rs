//! Filesystem discovery for submissions and templates.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect every file under the given roots, skipping files whose
/// path ends with one of the ignored suffixes (case-insensitive). Returns
/// absolute paths sorted for deterministic pair generation.
///
/// Traversal errors propagate: an unreadable root is a fatal setup condition,
/// unlike per-file read failures later in the pipeline.
pub fn collect_files(roots: &[PathBuf], ignored_suffixes: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if is_ignored(entry.path(), ignored_suffixes) {
                continue;
            }
            files.push(std::path::absolute(entry.path())?);
        }
    }
    files.sort();
    // Overlapping roots must not yield self-pairs downstream.
    files.dedup();
    Ok(files)
}

fn is_ignored(path: &Path, ignored_suffixes: &[String]) -> bool {
    let lowered = path.to_string_lossy().to_lowercase();
    ignored_suffixes
        .iter()
        .any(|suffix| lowered.ends_with(suffix.as_str()))
}
