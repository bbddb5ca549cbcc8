//! restcoll - in-memory JSON resource collections over HTTP
//!
//! The core is three layers:
//! - [`store`]: typed records with store-assigned, never reused ids
//! - [`codec`]: JSON encoding honouring per-field rename/skip rules
//! - [`rest_api`]: list/get/create/delete handlers and their route table
//!
//! [`http_server`], [`cli`] and [`observability`] wire the core into a
//! runnable server.

pub mod cli;
pub mod codec;
pub mod http_server;
pub mod observability;
pub mod records;
pub mod rest_api;
pub mod store;
