//! # Resource Handler
//!
//! Translates one request into one store operation and a typed reply.
//! Handlers are stateless apart from the store they were given.

use std::sync::Arc;

use crate::codec::{self, MessageEnvelope};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{CollectionStore, MemoryStore, Record, RecordId};

use super::errors::{RestError, RestResult};
use super::reply::Reply;

/// Collection operations for one record type
pub struct ResourceHandler<R: Record> {
    store: Arc<dyn CollectionStore<R>>,
}

// Derived Clone would require `R: Clone` on the handler itself
impl<R: Record> Clone for ResourceHandler<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Record> ResourceHandler<R> {
    pub fn new(store: Arc<dyn CollectionStore<R>>) -> Self {
        Self { store }
    }

    /// Handler over a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::<R>::new()))
    }

    pub fn store(&self) -> &Arc<dyn CollectionStore<R>> {
        &self.store
    }

    /// `GET /<coll>`
    pub fn list(&self) -> Reply<Vec<R>> {
        Reply::ok(self.store.list())
    }

    /// `GET /<coll>/:id`
    pub fn get(&self, raw_id: &str) -> RestResult<Reply<R>> {
        let id = parse_id(raw_id)?;
        Ok(Reply::ok(self.store.get(id)?))
    }

    /// `POST /<coll>`
    pub fn create(&self, body: &[u8]) -> RestResult<Reply<R>> {
        let record: R = codec::decode(body)?;
        let created = self.store.create(record);

        let id = created.id().to_string();
        log_event_with_fields(
            Event::RecordCreated,
            &[("collection", R::COLLECTION), ("id", id.as_str())],
        );
        Ok(Reply::created(created))
    }

    /// `DELETE /<coll>/:id`
    pub fn delete(&self, raw_id: &str) -> RestResult<Reply<MessageEnvelope>> {
        let id = parse_id(raw_id)?;
        self.store.delete(id)?;

        let id = id.to_string();
        log_event_with_fields(
            Event::RecordDeleted,
            &[("collection", R::COLLECTION), ("id", id.as_str())],
        );
        Ok(Reply::ok(MessageEnvelope::deleted()))
    }
}

fn parse_id(raw: &str) -> RestResult<RecordId> {
    raw.parse()
        .map_err(|_| RestError::InvalidId(raw.to_string()))
}
