//! Line-level shortest edit script computation.
//!
//! Two algorithms sit behind [`diff_lines`]: a quadratic LCS table for small
//! inputs, and the Myers O(ND) greedy technique for everything else so large
//! documents stay bounded by their edit distance rather than by the product
//! of their lengths. Both are deterministic and prefer keeping the earliest
//! occurrence of a repeated line as common, so reports are reproducible
//! across runs.

/// One operation of an edit script. The concatenation of `Common` + `Deleted`
/// texts reconstructs the left document; `Common` + `Inserted` the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    Common(String),
    Inserted(String),
    Deleted(String),
}

/// Inputs at or below this many lines on both sides use the LCS table.
const SMALL_INPUT: usize = 128;

/// Compute a minimal edit script between two line sequences.
pub fn diff_lines(a: &[&str], b: &[&str]) -> Vec<DiffOp> {
    if a.len() <= SMALL_INPUT && b.len() <= SMALL_INPUT {
        diff_lcs_table(a, b)
    } else {
        diff_myers(a, b)
    }
}

/// Quadratic LCS-table diff. Fills suffix LCS lengths, then walks forward
/// taking every available match so the earliest lines become common.
fn diff_lcs_table(a: &[&str], b: &[&str]) -> Vec<DiffOp> {
    let n = a.len();
    let m = b.len();
    // dp[i][j] = LCS length of a[i..] and b[j..]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a[i] == b[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(DiffOp::Common(a[i].to_string()));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            ops.push(DiffOp::Deleted(a[i].to_string()));
            i += 1;
        } else {
            ops.push(DiffOp::Inserted(b[j].to_string()));
            j += 1;
        }
    }
    ops.extend(a[i..].iter().map(|line| DiffOp::Deleted(line.to_string())));
    ops.extend(b[j..].iter().map(|line| DiffOp::Inserted(line.to_string())));
    ops
}

/// Myers greedy O(ND) diff with a full V-array trace for backtracking.
fn diff_myers(a: &[&str], b: &[&str]) -> Vec<DiffOp> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let offset = max;
    // k runs over [-max, max]; one extra slot for the v[1] = 0 seed.
    let mut v = vec![0isize; (2 * max + 2) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    let mut found_d = 0;
    'outer: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                found_d = d;
                break 'outer;
            }
            k += 2;
        }
    }

    // Walk the trace back from (n, m), emitting ops in reverse.
    let mut ops = Vec::new();
    let (mut x, mut y) = (n, m);
    for d in (0..=found_d).rev() {
        let v = &trace[d as usize];
        let k = x - y;
        let idx = (k + offset) as usize;
        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops.push(DiffOp::Common(a[(x - 1) as usize].to_string()));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if x == prev_x {
                ops.push(DiffOp::Inserted(b[prev_y as usize].to_string()));
            } else {
                ops.push(DiffOp::Deleted(a[prev_x as usize].to_string()));
            }
        }
        x = prev_x;
        y = prev_y;
    }
    ops.reverse();
    ops
}
