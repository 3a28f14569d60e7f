//! Error types for the glyph crate.

use thiserror::Error;

/// Errors raised by grid validation and pixel sampling.
///
/// Decoding itself is total; every failure here is structural and is
/// reported before any bits are interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    /// The grid text contained no rows at all.
    #[error("grid text is empty")]
    EmptyGrid,

    /// A row's length differs from the first row's.
    #[error("invalid grid format: row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The grid is rectangular but not the expected size.
    #[error("expected {expected}x{expected} grid, but got {rows}x{cols}")]
    WrongDimensions {
        rows: usize,
        cols: usize,
        expected: usize,
    },

    /// A cell holds something other than `/` or `\`.
    #[error("invalid character {found:?} at position ({row},{col}): only '/' and '\\' are allowed")]
    InvalidMark { row: usize, col: usize, found: char },

    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    PixelBufferMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// The image is too small to partition into capture cells.
    #[error("image too small to sample: {width}x{height}, need at least {min}x{min} pixels")]
    ImageTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
}

/// Convenience alias for glyph results.
pub type GlyphResult<T> = Result<T, GlyphError>;
