//! # Record Store
//!
//! In-memory CRUD over one typed collection.
//!
//! A store owns its records exclusively for the lifetime of the process.
//! Ids come from a monotonic counter held next to the records, so an id is
//! never handed out twice even after the record carrying it is deleted.

pub mod errors;
pub mod memory;
pub mod record;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::{Record, RecordId};

/// Storage seam for a single collection.
///
/// Handlers hold an `Arc<dyn CollectionStore<R>>`, so a persistent backend
/// can replace [`MemoryStore`] without touching the HTTP layer.
pub trait CollectionStore<R: Record>: Send + Sync {
    /// All records in insertion order (a snapshot)
    fn list(&self) -> Vec<R>;

    /// Look up one record by id
    fn get(&self, id: RecordId) -> StoreResult<R>;

    /// Assign the next id, append and return the stored record
    fn create(&self, record: R) -> R;

    /// Remove the record with this id, keeping the order of the others
    fn delete(&self, id: RecordId) -> StoreResult<()>;

    /// Number of records currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
