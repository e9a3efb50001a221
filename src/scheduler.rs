//! Fixed worker pool over the pairwise comparison list.
//!
//! Workers each own a static contiguous slice of the pair list; there is no
//! work stealing or rebalancing. The only shared mutable state is the output
//! sink, guarded by a mutex so one report's header and body are never
//! interleaved with another worker's output. Report order across workers is
//! not guaranteed.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;

use crate::diff::diff_lines;
use crate::document::Document;
use crate::report::{assemble_body, format_report, Report};
use crate::template::TemplateCorpus;

/// Mutex-guarded writer shared by all workers. Acquired only for the
/// duration of one report's emission.
pub struct ReportSink<W: Write> {
    inner: Mutex<W>,
}

impl<W: Write> ReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn emit(&self, text: &str) {
        let mut writer = self.inner.lock().unwrap();
        let _ = writer.write_all(text.as_bytes());
        let _ = writer.flush();
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap()
    }
}

/// Compare one pair of documents: load on demand, diff, classify against the
/// templates, assemble. Returns `None` when the report is suppressed.
pub fn compare_pair(path_a: &Path, path_b: &Path, corpus: &TemplateCorpus) -> Option<Report> {
    let doc_a = Document::load(path_a);
    let doc_b = Document::load(path_b);
    let script = diff_lines(&doc_a.lines(), &doc_b.lines());
    let body = assemble_body(&corpus.classify(script))?;
    Some(Report {
        path_a: doc_a.path,
        path_b: doc_b.path,
        body,
    })
}

/// Run every comparison across `jobs` scoped worker threads.
///
/// The pair list is split into contiguous blocks of `floor(total / jobs)`;
/// the final worker also takes the remainder from uneven division so no pair
/// is ever dropped. Worker count is capped at the pair count so no thread
/// starts with an empty slice.
pub fn run_comparisons<W: Write + Send>(
    pairs: &[(PathBuf, PathBuf)],
    corpus: &TemplateCorpus,
    jobs: usize,
    cwd: &Path,
    sink: &ReportSink<W>,
) {
    if pairs.is_empty() {
        return;
    }
    let jobs = jobs.clamp(1, pairs.len());
    let block = pairs.len() / jobs;

    thread::scope(|s| {
        for id in 0..jobs {
            let start = block * id;
            let end = if id + 1 == jobs {
                pairs.len()
            } else {
                block * (id + 1)
            };
            let slice = &pairs[start..end];
            s.spawn(move || {
                for (path_a, path_b) in slice {
                    if let Some(report) = compare_pair(path_a, path_b, corpus) {
                        sink.emit(&format_report(&report, cwd));
                    }
                }
            });
        }
    });
}
