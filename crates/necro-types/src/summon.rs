use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of hex characters in a rendered [`SummonId`].
pub const SUMMON_ID_HEX_LEN: usize = 24;

/// Opaque handle for a summoned artifact.
///
/// A `SummonId` is 12 raw bytes, conventionally rendered as 24 lowercase hex
/// characters. The bytes carry no internal structure; the id is only ever
/// compared for equality and used as a lookup key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SummonId([u8; 12]);

impl SummonId {
    /// Create a `SummonId` from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Mint a fresh random id.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The null id (all zeros). Represents "no artifact".
    pub const fn null() -> Self {
        Self([0u8; 12])
    }

    /// Returns `true` if this is the null id.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 12]
    }

    /// The raw 12 bytes.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Hex-encoded string representation (24 lowercase characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    ///
    /// The input must be exactly 24 hex characters; both cases are accepted.
    /// Anything shorter, longer, or containing a non-hex character is
    /// rejected. There is no padding or truncation path.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() != SUMMON_ID_HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: SUMMON_ID_HEX_LEN,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 12];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for SummonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SummonId({})", self.short_hex())
    }
}

impl fmt::Display for SummonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 12]> for SummonId {
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}

impl From<SummonId> for [u8; 12] {
    fn from(id: SummonId) -> Self {
        id.0
    }
}
