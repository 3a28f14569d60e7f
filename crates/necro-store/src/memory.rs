use std::collections::HashMap;
use std::sync::RwLock;

use necro_types::SummonId;

use crate::error::{StoreError, StoreResult};
use crate::record::SummonRecord;
use crate::traits::SummonStore;

/// In-memory, HashMap-based summon store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock` for
/// safe concurrent access and cloned on read/write.
pub struct InMemorySummonStore {
    records: RwLock<HashMap<SummonId, SummonRecord>>,
}

impl InMemorySummonStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemorySummonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SummonStore for InMemorySummonStore {
    fn get(&self, id: &SummonId) -> StoreResult<Option<SummonRecord>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn put(&self, record: &SummonRecord) -> StoreResult<()> {
        if record.id.is_null() {
            return Err(StoreError::NullSummonId);
        }
        let mut map = self.records.write().expect("lock poisoned");
        tracing::debug!(id = %record.id, label = %record.label, "filing summon record");
        map.insert(record.id, record.clone());
        Ok(())
    }

    fn delete(&self, id: &SummonId) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }

    fn recent(&self, limit: usize) -> StoreResult<Vec<SummonRecord>> {
        let map = self.records.read().expect("lock poisoned");
        let mut records: Vec<SummonRecord> = map.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}

impl std::fmt::Debug for InMemorySummonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemorySummonStore")
            .field("record_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SummonKind;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn make_record(byte: u8, label: &str) -> SummonRecord {
        SummonRecord::new(
            SummonId::from_bytes([byte; 12]),
            SummonKind::Character,
            label,
            json!({"name": label}),
        )
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let store = InMemorySummonStore::new();
        let record = make_record(1, "dracula");
        store.put(&record).unwrap();

        let read_back = store.get(&record.id).unwrap().expect("should exist");
        assert_eq!(read_back, record);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemorySummonStore::new();
        assert!(store.get(&SummonId::from_bytes([9; 12])).unwrap().is_none());
    }

    #[test]
    fn put_rejects_null_id() {
        let store = InMemorySummonStore::new();
        let mut record = make_record(1, "ghost");
        record.id = SummonId::null();

        let err = store.put(&record).unwrap_err();
        assert!(matches!(err, StoreError::NullSummonId));
        assert!(store.is_empty());
    }

    #[test]
    fn put_is_an_upsert() {
        let store = InMemorySummonStore::new();
        let mut record = make_record(1, "witch");
        store.put(&record).unwrap();

        record.label = "elder witch".into();
        store.put(&record).unwrap();

        assert_eq!(store.len(), 1);
        let read_back = store.get(&record.id).unwrap().unwrap();
        assert_eq!(read_back.label, "elder witch");
    }

    #[test]
    fn delete_present_record() {
        let store = InMemorySummonStore::new();
        let record = make_record(1, "reaper");
        store.put(&record).unwrap();

        assert!(store.delete(&record.id).unwrap());
        assert!(store.get(&record.id).unwrap().is_none());
        assert!(!store.delete(&record.id).unwrap());
    }

    #[test]
    fn delete_missing_record() {
        let store = InMemorySummonStore::new();
        assert!(!store.delete(&SummonId::from_bytes([3; 12])).unwrap());
    }

    // -----------------------------------------------------------------------
    // Recency ordering
    // -----------------------------------------------------------------------

    #[test]
    fn recent_orders_newest_first() {
        let store = InMemorySummonStore::new();
        let base = Utc::now();
        for (i, label) in ["oldest", "middle", "newest"].iter().enumerate() {
            let mut record = make_record(i as u8 + 1, label);
            record.created_at = base + Duration::seconds(i as i64);
            store.put(&record).unwrap();
        }

        let recent = store.recent(10).unwrap();
        let labels: Vec<&str> = recent.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn recent_respects_limit() {
        let store = InMemorySummonStore::new();
        let base = Utc::now();
        for i in 0..5u8 {
            let mut record = make_record(i + 1, "r");
            record.created_at = base + Duration::seconds(i as i64);
            store.put(&record).unwrap();
        }

        assert_eq!(store.recent(2).unwrap().len(), 2);
        assert_eq!(store.recent(0).unwrap().len(), 0);
        assert_eq!(store.recent(100).unwrap().len(), 5);
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_is_empty_clear() {
        let store = InMemorySummonStore::new();
        assert!(store.is_empty());

        store.put(&make_record(1, "a")).unwrap();
        store.put(&make_record(2, "b")).unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemorySummonStore::new());
        let record = make_record(1, "shared");
        store.put(&record).unwrap();
        let id = record.id;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let read = store.get(&id).unwrap();
                    assert!(read.is_some());
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemorySummonStore::new();
        store.put(&make_record(1, "x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemorySummonStore"));
        assert!(debug.contains("record_count"));
    }
}
