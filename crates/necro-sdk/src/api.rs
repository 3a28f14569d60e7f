//! The flat function surface consumed by view code.
//!
//! Each function pairs one core operation with the validation the caller
//! would otherwise have to remember.

use necro_diff::DiffRecord;
use necro_glyph::SigilGrid;
use necro_types::SummonId;

use crate::error::SdkResult;

/// Diff two texts line by line, windowed to `context_lines` of context.
///
/// Returns the record list directly; use [`necro_diff::diff_lines`] when
/// the line-count summary is also needed.
pub fn diff(old_text: &str, new_text: &str, context_lines: usize) -> Vec<DiffRecord> {
    necro_diff::diff_lines(old_text, new_text, context_lines).records
}

/// Encode a 24-hex-character identifier as a sigil grid.
///
/// Anything that is not exactly 24 hex characters is rejected up front;
/// there is no padding or truncation.
pub fn encode_identifier_to_grid(identifier: &str) -> SdkResult<SigilGrid> {
    let id = SummonId::from_hex(identifier)?;
    Ok(necro_glyph::encode(&id))
}

/// Decode a sigil grid to a hex identifier of `expected_len` characters.
pub fn decode_grid_to_identifier(grid: &SigilGrid, expected_len: usize) -> String {
    necro_glyph::decode(grid, expected_len)
}

/// Parse and structurally validate a plain-text grid export.
pub fn validate_grid_text(raw: &str) -> SdkResult<SigilGrid> {
    Ok(SigilGrid::from_text(raw)?)
}
