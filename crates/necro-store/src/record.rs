use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use necro_types::SummonId;

/// What kind of artifact a summon record points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummonKind {
    /// A persona card.
    Character,
    /// A visual theme activation.
    Theme,
    /// A shared code comparison.
    Diff,
    /// Anything scanned that the application does not recognize.
    Unknown,
}

/// One stored summon: the record a sigil resolves back to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummonRecord {
    /// The identifier the sigil encodes.
    pub id: SummonId,
    /// Record kind.
    pub kind: SummonKind,
    /// Human-readable label shown in summon listings.
    pub label: String,
    /// Kind-specific payload, opaque to the store.
    pub payload: Value,
    /// When the summon was minted.
    pub created_at: DateTime<Utc>,
}

impl SummonRecord {
    /// Create a record stamped with the current time.
    pub fn new(id: SummonId, kind: SummonKind, label: impl Into<String>, payload: Value) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            payload,
            created_at: Utc::now(),
        }
    }
}
