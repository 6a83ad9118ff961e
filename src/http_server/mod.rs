//! # HTTP Server Module
//!
//! Axum server exposing the stores API.
//!
//! # Endpoints
//!
//! - `/health` - Health check and API metadata
//! - `/store`, `/store/:store_id` - Stores
//! - `/item`, `/item/:item_id` - Items

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod item_routes;
pub mod server;
pub mod store_routes;

use serde::{Deserialize, Serialize};

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};

/// Confirmation body for successful deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
