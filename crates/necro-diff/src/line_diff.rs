//! Line-level diff: LCS alignment, record generation, and context windowing.
//!
//! The pipeline has three stages, composed by [`diff_lines`]:
//!
//! 1. [`compute_lcs`] aligns unchanged lines between the two versions.
//! 2. [`generate_diff`] walks both versions against the alignment and emits
//!    one [`DiffRecord`] per line.
//! 3. [`apply_context_window`] elides long unchanged runs, leaving changed
//!    lines plus a bounded amount of context.

use serde::{Deserialize, Serialize};

/// Number of unchanged lines kept on each side of a change.
pub const DEFAULT_CONTEXT: usize = 2;

/// One aligned line pair: `old[old_idx] == new[new_idx]`.
///
/// The alignment produced by [`compute_lcs`] is strictly increasing in both
/// fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchPair {
    /// Zero-based index into the old line sequence.
    pub old_idx: usize,
    /// Zero-based index into the new line sequence.
    pub new_idx: usize,
}

/// A single row of diff output. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    /// A line present in both versions.
    Unchanged {
        old_line: usize,
        new_line: usize,
        content: String,
    },
    /// A line present only in the new version.
    Addition { new_line: usize, content: String },
    /// A line present only in the old version.
    Deletion { old_line: usize, content: String },
    /// Marker for an elided run of unchanged lines.
    Separator,
}

impl DiffRecord {
    /// Returns `true` for additions and deletions.
    pub fn is_change(&self) -> bool {
        matches!(self, DiffRecord::Addition { .. } | DiffRecord::Deletion { .. })
    }

    /// The line text, if this record carries one.
    pub fn content(&self) -> Option<&str> {
        match self {
            DiffRecord::Unchanged { content, .. }
            | DiffRecord::Addition { content, .. }
            | DiffRecord::Deletion { content, .. } => Some(content),
            DiffRecord::Separator => None,
        }
    }
}

/// The result of diffing two texts line by line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The windowed record list.
    pub records: Vec<DiffRecord>,
    /// Total number of lines in the old text.
    pub old_lines: usize,
    /// Total number of lines in the new text.
    pub new_lines: usize,
}

impl LineDiff {
    /// Returns `true` if the two texts are identical line for line.
    pub fn is_empty(&self) -> bool {
        !self.records.iter().any(DiffRecord::is_change)
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Addition { .. }))
            .count()
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Deletion { .. }))
            .count()
    }
}

/// Diff two texts line by line.
///
/// Both texts are split on `\n` with no normalization; lines compare by
/// exact string equality. The record list is windowed to `context` unchanged
/// lines around each change; when the texts are identical the full file is
/// returned as `Unchanged` records.
pub fn diff_lines(old_text: &str, new_text: &str, context: usize) -> LineDiff {
    let old = split_lines(old_text);
    let new = split_lines(new_text);

    let pairs = compute_lcs(&old, &new);
    let records = generate_diff(&old, &new, &pairs);
    let records = apply_context_window(records, context);

    LineDiff {
        records,
        old_lines: old.len(),
        new_lines: new.len(),
    }
}

/// Split on `\n`. An empty text has no lines (not one empty line).
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Compute the longest common subsequence of two line sequences.
///
/// Classic dynamic-programming formulation: `dp[i][j]` is the LCS length of
/// the first `i` old lines and the first `j` new lines. O(m*n) time and
/// space, which is fine for interactive inputs (hundreds of lines) but a
/// real scaling limit for very large files.
///
/// Backtracking resolves equal-length paths toward the old side, so an
/// ambiguous alignment keeps the earlier old line. Any consistent choice
/// would be correct; this one is load-bearing only for callers that compare
/// output byte for byte.
pub fn compute_lcs(old: &[&str], new: &[&str]) -> Vec<MatchPair> {
    let m = old.len();
    let n = new.len();
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if old[i - 1] == new[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[m][n]);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            pairs.push(MatchPair {
                old_idx: i - 1,
                new_idx: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

/// Expand an LCS alignment into per-line records.
///
/// Walks both sequences simultaneously. Lines on the alignment come out
/// `Unchanged`; a line present on only one side before the next anchor
/// comes out `Addition` or `Deletion`; when both sides have an unmatched
/// line the pair reads as delete-then-add (there is no dedicated
/// "modified" kind). Tails past the last anchor flush as plain
/// additions/deletions.
pub fn generate_diff(old: &[&str], new: &[&str], pairs: &[MatchPair]) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    let mut old_idx = 0;
    let mut new_idx = 0;
    let mut pair_idx = 0;

    while old_idx < old.len() || new_idx < new.len() {
        match pairs.get(pair_idx) {
            Some(p) if p.old_idx == old_idx && p.new_idx == new_idx => {
                records.push(DiffRecord::Unchanged {
                    old_line: old_idx + 1,
                    new_line: new_idx + 1,
                    content: old[old_idx].to_string(),
                });
                old_idx += 1;
                new_idx += 1;
                pair_idx += 1;
            }
            // Old side is parked at the next anchor; the new line is an insert.
            Some(p) if p.old_idx == old_idx => {
                records.push(DiffRecord::Addition {
                    new_line: new_idx + 1,
                    content: new[new_idx].to_string(),
                });
                new_idx += 1;
            }
            // New side is parked; the old line is a removal.
            Some(p) if p.new_idx == new_idx => {
                records.push(DiffRecord::Deletion {
                    old_line: old_idx + 1,
                    content: old[old_idx].to_string(),
                });
                old_idx += 1;
            }
            _ => {
                if old_idx < old.len() && new_idx < new.len() {
                    records.push(DiffRecord::Deletion {
                        old_line: old_idx + 1,
                        content: old[old_idx].to_string(),
                    });
                    records.push(DiffRecord::Addition {
                        new_line: new_idx + 1,
                        content: new[new_idx].to_string(),
                    });
                    old_idx += 1;
                    new_idx += 1;
                } else if old_idx < old.len() {
                    records.push(DiffRecord::Deletion {
                        old_line: old_idx + 1,
                        content: old[old_idx].to_string(),
                    });
                    old_idx += 1;
                } else {
                    records.push(DiffRecord::Addition {
                        new_line: new_idx + 1,
                        content: new[new_idx].to_string(),
                    });
                    new_idx += 1;
                }
            }
        }
    }

    records
}

/// Window the record list to changed lines plus `context` unchanged lines
/// on each side, inserting a [`DiffRecord::Separator`] per elided run.
///
/// When there are no changes the input is returned unmodified (full file).
/// Separators are never adjacent to each other and never first or last in
/// the output.
pub fn apply_context_window(records: Vec<DiffRecord>, context: usize) -> Vec<DiffRecord> {
    if !records.iter().any(DiffRecord::is_change) {
        return records;
    }

    let mut keep = vec![false; records.len()];
    for (idx, record) in records.iter().enumerate() {
        if record.is_change() {
            let lo = idx.saturating_sub(context);
            let hi = (idx + context).min(records.len() - 1);
            for slot in &mut keep[lo..=hi] {
                *slot = true;
            }
        }
    }

    let mut out = Vec::new();
    let mut last_kept: Option<usize> = None;
    for (idx, record) in records.into_iter().enumerate() {
        if !keep[idx] {
            continue;
        }
        if let Some(prev) = last_kept {
            if idx > prev + 1 {
                out.push(DiffRecord::Separator);
            }
        }
        out.push(record);
        last_kept = Some(idx);
    }
    out
}
