//! # REST API Module
//!
//! Exposes record collections over HTTP:
//!
//! - `GET /<coll>` lists records
//! - `GET /<coll>/:id` fetches one record
//! - `POST /<coll>` creates a record from a JSON body
//! - `DELETE /<coll>/:id` removes a record
//!
//! Any other method on those paths answers 405 with the error envelope.

pub mod errors;
pub mod handler;
pub mod reply;
pub mod server;

pub use errors::{RestError, RestResult};
pub use handler::ResourceHandler;
pub use reply::Reply;
pub use server::{collection_routes, RestServer};
