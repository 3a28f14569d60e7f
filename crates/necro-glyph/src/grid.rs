//! The sigil grid: an 18x18 matrix of diagonal marks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GlyphError, GlyphResult};

/// Side length of the logical grid.
pub const GRID_SIZE: usize = 18;

/// One grid cell: a forward or backward diagonal stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    /// `/` -- carries bit 0.
    Slash,
    /// `\` -- carries bit 1.
    Backslash,
}

impl Mark {
    /// The character this mark renders as.
    pub const fn as_char(self) -> char {
        match self {
            Mark::Slash => '/',
            Mark::Backslash => '\\',
        }
    }

    /// Parse a mark character. Anything but `/` and `\` is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '/' => Some(Mark::Slash),
            '\\' => Some(Mark::Backslash),
            _ => None,
        }
    }

    /// The data bit this mark carries.
    pub const fn bit(self) -> u8 {
        match self {
            Mark::Slash => 0,
            Mark::Backslash => 1,
        }
    }

    /// The mark carrying the given bit.
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Mark::Backslash
        } else {
            Mark::Slash
        }
    }

    /// The opposite mark.
    pub const fn flipped(self) -> Self {
        match self {
            Mark::Slash => Mark::Backslash,
            Mark::Backslash => Mark::Slash,
        }
    }
}

/// An 18x18 grid of diagonal marks.
///
/// The four corner cells are sentinels: encoding sets them all to `\` and
/// decoding skips them, leaving 320 interior cells for data. The sentinel
/// convention lives on the codec side; a grid parsed from text or sampled
/// from pixels holds whatever marks the source had.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigilGrid {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl SigilGrid {
    /// A grid of all `/` with the four corner sentinels set to `\`.
    pub fn blank() -> Self {
        let mut grid = Self {
            cells: [[Mark::Slash; GRID_SIZE]; GRID_SIZE],
        };
        for (row, col) in [
            (0, 0),
            (0, GRID_SIZE - 1),
            (GRID_SIZE - 1, 0),
            (GRID_SIZE - 1, GRID_SIZE - 1),
        ] {
            grid.cells[row][col] = Mark::Backslash;
        }
        grid
    }

    /// The mark at `(row, col)`. Panics on out-of-range indices.
    pub fn mark(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    /// Set the mark at `(row, col)`. Panics on out-of-range indices.
    pub fn set_mark(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[[Mark; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Returns `true` for the four sentinel corners.
    pub fn is_corner(row: usize, col: usize) -> bool {
        (row == 0 || row == GRID_SIZE - 1) && (col == 0 || col == GRID_SIZE - 1)
    }

    /// Interior cell coordinates in row-major order, corners skipped.
    ///
    /// This is the cell order shared by encoding and decoding; it visits
    /// `GRID_SIZE * GRID_SIZE - 4` cells.
    pub fn interior() -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| !Self::is_corner(row, col))
    }

    /// Render as the plain-text export format: newline-joined rows of
    /// `/` and `\`, no header.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|m| m.as_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse a plain-text grid export.
    ///
    /// CRLF line endings and embedded spaces are tolerated (text exports
    /// get reflowed by mail clients and editors); blank lines are dropped.
    /// Everything else is strict: every row must match the first row's
    /// length, the grid must be exactly 18x18, and every cell must be `/`
    /// or `\`. Positions in errors are 1-based.
    pub fn from_text(raw: &str) -> GlyphResult<Self> {
        let cleaned = raw.trim().replace("\r\n", "\n").replace(' ', "");
        let lines: Vec<&str> = cleaned.split('\n').filter(|l| !l.is_empty()).collect();

        if lines.is_empty() {
            return Err(GlyphError::EmptyGrid);
        }

        let expected = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate().skip(1) {
            let actual = line.chars().count();
            if actual != expected {
                return Err(GlyphError::RaggedRow {
                    row: i + 1,
                    expected,
                    actual,
                });
            }
        }

        if lines.len() != GRID_SIZE || expected != GRID_SIZE {
            return Err(GlyphError::WrongDimensions {
                rows: lines.len(),
                cols: expected,
                expected: GRID_SIZE,
            });
        }

        let mut cells = [[Mark::Slash; GRID_SIZE]; GRID_SIZE];
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                cells[row][col] = Mark::from_char(c).ok_or(GlyphError::InvalidMark {
                    row: row + 1,
                    col: col + 1,
                    found: c,
                })?;
            }
        }

        Ok(Self { cells })
    }
}

impl fmt::Debug for SigilGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SigilGrid:")?;
        for row in &self.cells {
            for mark in row {
                write!(f, "{}", mark.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
