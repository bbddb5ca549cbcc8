//! # REST API HTTP Server
//!
//! Declarative route table: each collection contributes two paths, and each
//! path maps its supported methods to the collection's handler. Methods not
//! in the table fall through to a 405 envelope.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::Uri,
    routing::get,
    Router,
};

use crate::codec::{CodecError, MessageEnvelope};
use crate::store::{CollectionStore, Record};

use super::errors::{RestError, RestResult};
use super::handler::ResourceHandler;
use super::reply::Reply;

/// Builder collecting the routes of several collections
pub struct RestServer {
    router: Router,
    collections: Vec<&'static str>,
}

impl RestServer {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            collections: Vec::new(),
        }
    }

    /// Mount `R::COLLECTION` backed by `store`.
    ///
    /// Mounting the same collection name twice panics, as overlapping axum
    /// routes do.
    pub fn collection<R: Record>(mut self, store: Arc<dyn CollectionStore<R>>) -> Self {
        let routes = collection_routes(ResourceHandler::new(store));
        self.router = self.router.merge(routes);
        self.collections.push(R::COLLECTION);
        self
    }

    /// Names of the mounted collections, in mount order
    pub fn collections(&self) -> &[&'static str] {
        &self.collections
    }

    /// Finish the table; unknown paths answer 404 with the error envelope
    pub fn router(self) -> Router {
        self.router.fallback(route_not_found)
    }
}

impl Default for RestServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes for one collection: `/<coll>` and `/<coll>/:id`
pub fn collection_routes<R: Record>(handler: ResourceHandler<R>) -> Router {
    let root = format!("/{}", R::COLLECTION);
    let member = format!("/{}/:id", R::COLLECTION);

    Router::new()
        .route(
            &root,
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            &member,
            get(get_handler::<R>)
                .delete(delete_handler::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(handler)
}

async fn list_handler<R: Record>(State(handler): State<ResourceHandler<R>>) -> Reply<Vec<R>> {
    handler.list()
}

async fn get_handler<R: Record>(
    State(handler): State<ResourceHandler<R>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> RestResult<Reply<R>> {
    handler.get(&path_id(id, &uri)?)
}

async fn create_handler<R: Record>(
    State(handler): State<ResourceHandler<R>>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<Reply<R>> {
    // Oversized or unreadable bodies answer 400 like any other bad body
    let body = body.map_err(|rejection| CodecError::Io(rejection.body_text()))?;
    handler.create(&body)
}

async fn delete_handler<R: Record>(
    State(handler): State<ResourceHandler<R>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> RestResult<Reply<MessageEnvelope>> {
    handler.delete(&path_id(id, &uri)?)
}

/// The `:id` segment; one that does not percent-decode to UTF-8 is an
/// invalid id, reported as it appeared in the path
fn path_id(id: Result<Path<String>, PathRejection>, uri: &Uri) -> RestResult<String> {
    id.map(|Path(id)| id).map_err(|_| {
        let raw = uri.path().rsplit('/').next().unwrap_or_default();
        RestError::InvalidId(raw.to_string())
    })
}

async fn method_not_allowed() -> RestError {
    RestError::MethodNotAllowed
}

async fn route_not_found() -> RestError {
    RestError::RouteNotFound
}
