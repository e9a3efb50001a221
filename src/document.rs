//! Loaded submission/template documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::normalize::unify_whitespace;

/// A document loaded into memory, immutable once constructed.
///
/// The raw text is kept whole and normalized before any line splitting, so
/// whitespace unification applies uniformly across the file. Splitting on
/// newlines happens only at diff time via [`Document::lines`].
pub struct Document {
    pub path: PathBuf,
    pub raw: String,
    pub normalized: String,
}

impl Document {
    /// Load a document from disk. An unreadable file yields empty content
    /// rather than an error: any pair involving it degrades to "no overlap"
    /// instead of aborting the run.
    pub fn load(path: &Path) -> Self {
        let raw = fs::read_to_string(path).unwrap_or_default();
        let normalized = unify_whitespace(&raw);
        Self {
            path: path.to_path_buf(),
            raw,
            normalized,
        }
    }

    /// The normalized content split on newlines, the unit the diff works on.
    pub fn lines(&self) -> Vec<&str> {
        if self.normalized.is_empty() {
            return Vec::new();
        }
        self.normalized.split('\n').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use std::path::Path;

    #[test]
    fn load_normalizes_before_splitting() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("sub.c");
        std::fs::write(&path, "int  main(){\n\treturn 0;\n}").expect("write sub.c");

        let doc = Document::load(&path);
        assert_eq!(doc.normalized, "int main(){\n return 0;\n}");
        assert_eq!(doc.lines(), vec!["int main(){", " return 0;", "}"]);
    }

    #[test]
    fn missing_file_loads_empty() {
        let doc = Document::load(Path::new("/nonexistent/definitely/missing.c"));
        assert_eq!(doc.raw, "");
        assert!(doc.lines().is_empty());
    }

    #[test]
    fn empty_file_has_no_lines() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("empty");
        std::fs::write(&path, "").expect("write empty");
        assert!(Document::load(&path).lines().is_empty());
    }
}
