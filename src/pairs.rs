//! Enumeration of the unique unordered pairs of submissions to compare.

/// All 2-subsets of `{0, .., n-1}` as ordered index pairs `(i, j)` with
/// `i < j`, in lexicographic order so scheduling is reproducible across runs.
pub fn combinations(n: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for i in 0..n {
        for j in i + 1..n {
            out.push((i, j));
        }
    }
    out
}
