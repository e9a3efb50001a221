//! Instructor-template corpus and boilerplate classification.

use std::path::Path;

use crate::diff::DiffOp;
use crate::document::Document;

/// The normalized instructor templates, loaded once before any comparison
/// and read-only for the lifetime of the run.
pub struct TemplateCorpus {
    documents: Vec<Document>,
}

/// A classified edit-script operation. Only genuine common lines keep their
/// text; everything else collapses to an ellipsis marker during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredOp {
    Genuine(String),
    Boilerplate,
    Inserted,
    Deleted,
}

impl TemplateCorpus {
    pub fn load(paths: &[impl AsRef<Path>]) -> Self {
        let documents = paths
            .iter()
            .map(|path| Document::load(path.as_ref()))
            .collect();
        Self { documents }
    }

    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Whether a line occurs as a contiguous substring of any template's
    /// whole normalized text. Containment against the blob, not line-array
    /// equality: boilerplate reflowed with surrounding context in a
    /// submission still matches, which biases toward suppression rather
    /// than falsely flagging template text as plagiarism.
    pub fn contains(&self, line: &str) -> bool {
        self.documents
            .iter()
            .any(|doc| doc.normalized.contains(line))
    }

    /// Re-tag every `Common` op as genuine or boilerplate; inserted and
    /// deleted ops pass through as text-free markers.
    pub fn classify(&self, script: Vec<DiffOp>) -> Vec<FilteredOp> {
        script
            .into_iter()
            .map(|op| match op {
                DiffOp::Common(text) => {
                    if self.contains(&text) {
                        FilteredOp::Boilerplate
                    } else {
                        FilteredOp::Genuine(text)
                    }
                }
                DiffOp::Inserted(_) => FilteredOp::Inserted,
                DiffOp::Deleted(_) => FilteredOp::Deleted,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FilteredOp, TemplateCorpus};
    use crate::diff::DiffOp;
    use std::path::PathBuf;

    fn corpus_from(content: &str) -> TemplateCorpus {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("template.c");
        std::fs::write(&path, content).expect("write template");
        // Load eagerly while the tempdir is alive.
        TemplateCorpus::load(&[path])
    }

    #[test]
    fn empty_corpus_matches_nothing() {
        let corpus = TemplateCorpus::empty();
        assert!(!corpus.contains("#include <stdio.h>"));
    }

    #[test]
    fn containment_is_substring_over_the_blob() {
        let corpus = corpus_from("prefix\t #include  <stdio.h>  suffix\n");
        // Normalized template: "prefix #include <stdio.h> suffix\n".
        assert!(corpus.contains("#include <stdio.h>"));
        assert!(corpus.contains("prefix #include <stdio.h>"));
        assert!(!corpus.contains("#include <stdlib.h>"));
    }

    #[test]
    fn one_character_difference_stays_genuine() {
        let corpus = corpus_from("int main(void)");
        assert!(corpus.contains("int main(void)"));
        assert!(!corpus.contains("int main(voidd)"));
    }

    #[test]
    fn classify_retags_common_only() {
        let corpus = corpus_from("#include <stdio.h>\n");
        let script = vec![
            DiffOp::Common("#include <stdio.h>".to_string()),
            DiffOp::Common("int unique_helper(int x)".to_string()),
            DiffOp::Inserted("only in b".to_string()),
            DiffOp::Deleted("only in a".to_string()),
        ];
        let filtered = corpus.classify(script);
        assert_eq!(
            filtered,
            vec![
                FilteredOp::Boilerplate,
                FilteredOp::Genuine("int unique_helper(int x)".to_string()),
                FilteredOp::Inserted,
                FilteredOp::Deleted,
            ]
        );
    }

    #[test]
    fn load_collects_all_templates() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let one = tmp.path().join("a.h");
        let two = tmp.path().join("b.h");
        std::fs::write(&one, "alpha line\n").expect("write a.h");
        std::fs::write(&two, "beta line\n").expect("write b.h");
        let corpus = TemplateCorpus::load(&[one, two]);
        assert!(corpus.contains("alpha line"));
        assert!(corpus.contains("beta line"));
    }

    #[test]
    fn unreadable_template_degrades_to_empty() {
        let corpus = TemplateCorpus::load(&[PathBuf::from("/no/such/template.c")]);
        assert!(!corpus.contains("anything"));
    }
}
