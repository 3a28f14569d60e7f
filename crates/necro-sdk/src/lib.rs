//! High-level SDK for Necroforge.
//!
//! Provides a unified API over the diff engine, the sigil codec, and the
//! summon record store. This is the main entry point for applications
//! embedding Necroforge.

pub mod api;
pub mod error;
pub mod forge;

pub use api::{
    decode_grid_to_identifier, diff, encode_identifier_to_grid, validate_grid_text,
};
pub use error::{SdkError, SdkResult};
pub use forge::Forge;

// Re-export key types
pub use necro_diff::{DiffRecord, LineDiff, DEFAULT_CONTEXT};
pub use necro_glyph::{Mark, PixelView, SigilGrid, GRID_SIZE, REDUNDANCY};
pub use necro_store::{InMemorySummonStore, SummonKind, SummonRecord, SummonStore};
pub use necro_types::{SummonId, SUMMON_ID_HEX_LEN};
