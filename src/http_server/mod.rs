//! # HTTP Server Module
//!
//! Combines the collection routes, a health check, request logging and CORS
//! into one axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/<coll>` and `/<coll>/:id` - one pair per enabled collection

pub mod config;
pub mod middleware;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
