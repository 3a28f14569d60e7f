//! Identifier <-> grid codec: bit expansion, layout, and majority-vote decode.

use std::fmt::Write as _;

use necro_types::{SummonId, TypeError};

use crate::grid::{Mark, SigilGrid};

/// Times each data bit is repeated in the encoded stream.
pub const REDUNDANCY: usize = 3;

/// Encode a summon id into a sigil grid.
///
/// The 12 id bytes expand MSB-first into 96 bits; each bit is repeated
/// [`REDUNDANCY`] times, giving 288 marks laid into the interior cells in
/// row-major order. The 32 interior cells past the stream stay `/`, and
/// the four corners are `\` sentinels.
///
/// Encoding is deterministic and total: the typed id rules out the short
/// or over-long identifiers that would need a padding policy.
pub fn encode(id: &SummonId) -> SigilGrid {
    let mut grid = SigilGrid::blank();

    let bits = id
        .as_bytes()
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .flat_map(|bit| std::iter::repeat(bit).take(REDUNDANCY));

    for ((row, col), bit) in SigilGrid::interior().zip(bits) {
        grid.set_mark(row, col, Mark::from_bit(bit));
    }
    grid
}

/// Decode a sigil grid back to a hex identifier of `expected_len` characters.
///
/// Interior cells are read in encode order and majority-voted in groups of
/// [`REDUNDANCY`]; the first `expected_len * 4` voted bits pack MSB-first
/// into bytes, which render as lowercase hex. An output shorter than
/// `expected_len` pads on the right with `'0'`; a longer one truncates.
/// Both are defined, lossy behavior for callers that ask for unusual
/// lengths — the standard surface is `expected_len = 24`, which consumes
/// exactly the 288 data-bearing cells.
///
/// Decoding is total: any grid yields some identifier. Structural checks
/// belong to [`SigilGrid::from_text`] and happen before this point.
pub fn decode(grid: &SigilGrid, expected_len: usize) -> String {
    let raw: Vec<u8> = SigilGrid::interior()
        .map(|(row, col)| grid.mark(row, col).bit())
        .collect();

    let voted: Vec<u8> = raw
        .chunks(REDUNDANCY)
        .map(|chunk| {
            let ones: usize = chunk.iter().map(|&b| b as usize).sum();
            u8::from(ones * 2 > chunk.len())
        })
        .collect();

    let data_bits = &voted[..voted.len().min(expected_len * 4)];

    let mut result = String::with_capacity(expected_len);
    for byte_bits in data_bits.chunks(8) {
        if byte_bits.len() < 8 {
            break;
        }
        let byte = byte_bits.iter().fold(0u8, |acc, &b| (acc << 1) | b);
        // Infallible write into a String.
        let _ = write!(result, "{byte:02x}");
    }

    if result.len() < expected_len {
        let pad = expected_len - result.len();
        result.extend(std::iter::repeat('0').take(pad));
    } else {
        result.truncate(expected_len);
    }
    result
}

/// Decode a grid straight to a [`SummonId`].
pub fn decode_summon_id(grid: &SigilGrid) -> Result<SummonId, TypeError> {
    SummonId::from_hex(&decode(grid, necro_types::SUMMON_ID_HEX_LEN))
}
