//! Line diff engine for Necroforge.
//!
//! Aligns two versions of a text with a longest-common-subsequence pass,
//! expands the alignment into per-line change records, and windows the
//! result down to changed lines plus surrounding context.
//!
//! # Key Types
//!
//! - [`LineDiff`] / [`DiffRecord`] -- The windowed record list and its rows
//! - [`MatchPair`] -- One aligned line pair in the LCS
//!
//! The engine is pure and total: it performs no I/O and cannot fail on
//! string inputs.

pub mod line_diff;

pub use line_diff::{
    apply_context_window, compute_lcs, diff_lines, generate_diff, DiffRecord, LineDiff, MatchPair,
    DEFAULT_CONTEXT,
};
