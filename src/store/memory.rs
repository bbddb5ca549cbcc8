//! In-memory collection store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordId};
use super::CollectionStore;

/// Records plus the id counter, always mutated together
struct Collection<R> {
    records: Vec<R>,
    /// Number of records ever created; the next id is `created + 1`
    created: RecordId,
}

/// In-memory store for one collection.
///
/// One `RwLock` guards both the records and the id counter: `create` and
/// `delete` take the write lock, `list` and `get` share the read lock.
pub struct MemoryStore<R: Record> {
    inner: RwLock<Collection<R>>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                records: Vec::new(),
                created: 0,
            }),
        }
    }

    /// Build a store pre-populated with `seed`.
    ///
    /// Seeds go through `create`, so they get ids `1..=n` and the counter
    /// continues after them.
    pub fn with_records(seed: impl IntoIterator<Item = R>) -> Self {
        let store = Self::new();
        for record in seed {
            store.create(record);
        }
        store
    }

    // Every mutation is a single push or remove, so the data behind a
    // poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Collection<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collection<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> CollectionStore<R> for MemoryStore<R> {
    fn list(&self) -> Vec<R> {
        self.read().records.clone()
    }

    fn get(&self, id: RecordId) -> StoreResult<R> {
        self.read()
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, mut record: R) -> R {
        let mut collection = self.write();
        collection.created += 1;
        record.set_id(collection.created);
        collection.records.push(record.clone());
        record
    }

    fn delete(&self, id: RecordId) -> StoreResult<()> {
        let mut collection = self.write();
        let index = collection
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        // Vec::remove shifts the tail, keeping relative order
        collection.records.remove(index);
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().records.len()
    }
}
