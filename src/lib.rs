//! # simcheck
//!
//! Pairwise similarity checker for submitted documents (e.g. student code
//! submissions). Every unique pair of submissions is diffed at line
//! granularity; common lines attributable to an instructor template are
//! suppressed as boilerplate, and what remains is condensed into a short
//! report of genuine overlap.
//!
//! Pipeline: discover files → normalize whitespace → diff each pair →
//! classify against the template corpus → assemble and emit retained
//! reports through a synchronized sink under a fixed worker pool.

pub mod args;
pub mod diff;
pub mod document;
pub mod fs_utils;
pub mod normalize;
pub mod pairs;
pub mod report;
pub mod scheduler;
pub mod template;
