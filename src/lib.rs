//! stores_api - A REST API for stores and the items they sell
//!
//! Requests flow from the axum router in [`http_server`] through request
//! validation in [`schema`] to scoped SQLite connections in [`storage`].

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod storage;

pub use http_server::{build_router, HttpServer, ServerConfig};
pub use storage::Database;
