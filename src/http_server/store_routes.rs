//! Store HTTP Routes
//!
//! Create, read, list and delete stores. Stores are never updated in place.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::MessageResponse;
use crate::observability::Event;
use crate::schema::{NewStore, Store, Validate};
use crate::storage::{stores, Database, StorageError};

pub const STORE_NOT_FOUND: &str = "Store not found.";
pub const STORE_NAME_TAKEN: &str = "A store with that name already exists.";
pub const STORE_HAS_ITEMS: &str = "Store still has items; delete them first.";

// ==================
// Shared State
// ==================

/// Store state shared across handlers
pub struct StoreState {
    pub database: Database,
}

impl StoreState {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

// ==================
// Store Routes
// ==================

/// Create store routes
pub fn store_routes(state: Arc<StoreState>) -> Router {
    Router::new()
        .route("/store", get(list_stores_handler).post(create_store_handler))
        .route(
            "/store/:store_id",
            get(get_store_handler).delete(delete_store_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn get_store_handler(
    State(state): State<Arc<StoreState>>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Store>> {
    let store = state
        .database
        .run(move |conn| stores::get(conn, &store_id))
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found(STORE_NOT_FOUND))?;

    Ok(Json(store))
}

async fn list_stores_handler(State(state): State<Arc<StoreState>>) -> ApiResult<Json<Vec<Store>>> {
    let stores = state
        .database
        .run(|conn| stores::list(conn))
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(stores))
}

async fn create_store_handler(
    State(state): State<Arc<StoreState>>,
    payload: Result<Json<NewStore>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Store>)> {
    let Json(body) = payload?;
    body.validate()?;

    let store = state
        .database
        .run(move |conn| stores::insert(conn, &body))
        .await
        .map_err(|err| match err {
            StorageError::Unique(_) => ApiError::conflict(STORE_NAME_TAKEN),
            StorageError::Check(msg) => ApiError::Validation(msg),
            other => ApiError::internal(other),
        })?;

    tracing::info!(event = Event::StoreCreated.as_str(), store_id = %store.id, name = %store.name);
    Ok((StatusCode::CREATED, Json(store)))
}

async fn delete_store_handler(
    State(state): State<Arc<StoreState>>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = store_id.clone();
    let deleted = state
        .database
        .run(move |conn| stores::delete(conn, &id))
        .await
        .map_err(|err| match err {
            StorageError::ForeignKey(_) => ApiError::conflict(STORE_HAS_ITEMS),
            other => ApiError::internal(other),
        })?;

    if !deleted {
        return Err(ApiError::not_found(STORE_NOT_FOUND));
    }

    tracing::info!(event = Event::StoreDeleted.as_str(), store_id = %store_id);
    Ok(Json(MessageResponse::new("Store deleted.")))
}
