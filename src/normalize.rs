//! Whitespace unification applied to every document before diffing.
//!
//! Templates and submissions are compared after collapsing each run of
//! non-newline whitespace to a single space, so reindented or retabbed
//! copies still line up. Newlines stay untouched: they are the structural
//! separators the line diff splits on.

/// Replace every maximal run of non-newline whitespace with a single space.
///
/// Idempotent: a second pass finds only single spaces and leaves them alone.
pub fn unify_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch != '\n' && ch.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run {
            out.push(' ');
            in_run = false;
        }
        out.push(ch);
    }
    if in_run {
        out.push(' ');
    }
    out
}
