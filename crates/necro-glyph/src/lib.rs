//! Sigil grid codec for Necroforge.
//!
//! A summon identifier (24 hex characters, 12 bytes) is rendered as an
//! 18x18 grid of diagonal marks. Each data bit is repeated three times
//! before being laid into the grid, so a single flipped cell per triplet
//! survives a lossy optical capture; decoding majority-votes each triplet
//! back to one bit.
//!
//! # Key Types
//!
//! - [`SigilGrid`] / [`Mark`] -- The 18x18 diagonal-mark grid
//! - [`encode`] / [`decode`] -- Identifier <-> grid
//! - [`sample_grid`] / [`PixelView`] -- Grid recovery from a photographed capture
//! - [`GlyphError`] -- Structural validation failures

pub mod codec;
pub mod error;
pub mod grid;
pub mod sample;

pub use codec::{decode, decode_summon_id, encode, REDUNDANCY};
pub use error::{GlyphError, GlyphResult};
pub use grid::{Mark, SigilGrid, GRID_SIZE};
pub use sample::{sample_grid, PixelView, CAPTURE_GRID_SIZE};
