use necro_types::SummonId;

use crate::error::StoreResult;
use crate::record::SummonRecord;

/// Keyed summon record store.
///
/// All implementations must satisfy these invariants:
/// - `put` is an idempotent upsert: filing the same record twice leaves one
///   copy, and filing a different record under an existing id replaces it.
/// - Records under the null id are rejected, never silently stored.
/// - `recent` orders strictly by `created_at`, newest first.
/// - The store never interprets record payloads.
pub trait SummonStore: Send + Sync {
    /// Look up a record by its summon id.
    ///
    /// Returns `Ok(None)` if no record exists under the id.
    fn get(&self, id: &SummonId) -> StoreResult<Option<SummonRecord>>;

    /// File a record under its id (upsert).
    fn put(&self, record: &SummonRecord) -> StoreResult<()>;

    /// Remove a record by id. Returns `true` if the record existed.
    fn delete(&self, id: &SummonId) -> StoreResult<bool>;

    /// The most recently minted records, newest first, at most `limit`.
    fn recent(&self, limit: usize) -> StoreResult<Vec<SummonRecord>>;
}
