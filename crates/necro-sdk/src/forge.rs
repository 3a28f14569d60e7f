//! The `Forge` facade: mint, resolve, and forget summons over an injected store.

use serde_json::Value;

use necro_glyph::{decode_summon_id, encode, sample_grid, PixelView, SigilGrid};
use necro_store::{InMemorySummonStore, SummonKind, SummonRecord, SummonStore};
use necro_types::SummonId;

use crate::error::{SdkError, SdkResult};

/// High-level summon workflow over a [`SummonStore`].
///
/// The store is injected so the embedding application decides persistence;
/// the forge itself holds no other state.
pub struct Forge<S: SummonStore> {
    store: S,
}

impl Forge<InMemorySummonStore> {
    /// A forge over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemorySummonStore::new())
    }
}

impl<S: SummonStore> Forge<S> {
    /// Wrap an injected store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mint a new summon: generate an id, file the record, render its sigil.
    pub fn summon(
        &self,
        kind: SummonKind,
        label: impl Into<String>,
        payload: Value,
    ) -> SdkResult<(SummonId, SigilGrid)> {
        let id = SummonId::generate();
        let record = SummonRecord::new(id, kind, label, payload);
        self.store.put(&record)?;
        tracing::debug!(id = %id, "minted summon");
        Ok((id, encode(&id)))
    }

    /// Resolve an id to its stored record.
    pub fn recall(&self, id: &SummonId) -> SdkResult<SummonRecord> {
        self.store
            .get(id)?
            .ok_or_else(|| SdkError::SummonNotFound(id.to_hex()))
    }

    /// Resolve a plain-text grid export: validate, decode, look up.
    pub fn recall_from_text(&self, raw: &str) -> SdkResult<SummonRecord> {
        let grid = SigilGrid::from_text(raw)?;
        let id = decode_summon_id(&grid)?;
        self.recall(&id)
    }

    /// Resolve a captured image: sample the grid, decode, look up.
    pub fn recall_from_pixels(&self, view: &PixelView<'_>) -> SdkResult<SummonRecord> {
        let grid = sample_grid(view)?;
        let id = decode_summon_id(&grid)?;
        self.recall(&id)
    }

    /// Drop a summon record. Returns `true` if it existed.
    pub fn forget(&self, id: &SummonId) -> SdkResult<bool> {
        Ok(self.store.delete(id)?)
    }

    /// The most recently minted summons, newest first.
    pub fn recent(&self, limit: usize) -> SdkResult<Vec<SummonRecord>> {
        Ok(self.store.recent(limit)?)
    }

    /// Re-render the sigil for an existing summon.
    pub fn resummon(&self, id: &SummonId) -> SdkResult<SigilGrid> {
        let record = self.recall(id)?;
        Ok(encode(&record.id))
    }
}
