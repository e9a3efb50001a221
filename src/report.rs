//! Report assembly: collapse a classified edit script into the condensed
//! body emitted for a pair, applying the suppression thresholds.

use std::path::{Path, PathBuf};

use crate::template::FilteredOp;

/// A retained comparison result for one pair of documents.
pub struct Report {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub body: String,
}

/// Minimum body length that rescues a single-line match from suppression.
const SHORT_BODY_LIMIT: usize = 50;
/// Minimum genuine line count below which short bodies are suppressed.
const MIN_GENUINE_LINES: usize = 2;

/// Build the report body for a classified script, or `None` when the result
/// falls under the suppression thresholds and should never be emitted.
///
/// Genuine lines are kept verbatim; boilerplate, inserted, and deleted runs
/// collapse to a single `...` marker each. The body is then trimmed of
/// surrounding whitespace and dots, so markers survive only between genuine
/// content.
pub fn assemble_body(ops: &[FilteredOp]) -> Option<String> {
    let mut body = String::new();
    for op in ops {
        match op {
            FilteredOp::Genuine(text) => {
                body.push_str(text);
                body.push('\n');
            }
            FilteredOp::Boilerplate | FilteredOp::Inserted | FilteredOp::Deleted => {
                if !body.ends_with("...\n") {
                    body.push_str("...\n");
                }
            }
        }
    }

    let trimmed = body.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.is_empty() {
        return None;
    }
    // Ignore trivial single-token matches unless they are very long.
    let genuine_lines = trimmed.split('\n').filter(|line| *line != "...").count();
    if genuine_lines < MIN_GENUINE_LINES && trimmed.len() < SHORT_BODY_LIMIT {
        return None;
    }
    Some(trimmed.to_string())
}

/// Render a retained report per the output contract: relative path header,
/// backtick-wrapped body, two blank lines.
pub fn format_report(report: &Report, cwd: &Path) -> String {
    format!(
        "{} <=> {}\n`{}`\n\n\n",
        relative_to(&report.path_a, cwd).display(),
        relative_to(&report.path_b, cwd).display(),
        report.body
    )
}

fn relative_to<'a>(path: &'a Path, cwd: &Path) -> &'a Path {
    path.strip_prefix(cwd).unwrap_or(path)
}
