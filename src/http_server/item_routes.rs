//! Item HTTP Routes
//!
//! Create, read, list, update and delete items. Every item belongs to one
//! store; the store is fixed at creation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::store_routes::STORE_NOT_FOUND;
use super::MessageResponse;
use crate::observability::Event;
use crate::schema::{Item, ItemUpdate, NewItem, Validate};
use crate::storage::{items, Database, StorageError};

pub const ITEM_NOT_FOUND: &str = "Item not found.";
pub const ITEM_NAME_TAKEN: &str = "An item with that name already exists in this store.";

// ==================
// Shared State
// ==================

/// Item state shared across handlers
pub struct ItemState {
    pub database: Database,
}

impl ItemState {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

// ==================
// Item Routes
// ==================

/// Create item routes
pub fn item_routes(state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/item", get(list_items_handler).post(create_item_handler))
        .route(
            "/item/:item_id",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn get_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<Item>> {
    let item = state
        .database
        .run(move |conn| items::get(conn, &item_id))
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;

    Ok(Json(item))
}

async fn list_items_handler(State(state): State<Arc<ItemState>>) -> ApiResult<Json<Vec<Item>>> {
    let items = state
        .database
        .run(|conn| items::list(conn))
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(items))
}

async fn create_item_handler(
    State(state): State<Arc<ItemState>>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(body) = payload?;
    body.validate()?;

    let item = state
        .database
        .run(move |conn| items::insert(conn, &body))
        .await
        .map_err(|err| match err {
            StorageError::ForeignKey(_) => ApiError::not_found(STORE_NOT_FOUND),
            StorageError::Unique(_) => ApiError::conflict(ITEM_NAME_TAKEN),
            StorageError::Check(msg) => ApiError::Validation(msg),
            other => ApiError::internal(other),
        })?;

    tracing::info!(
        event = Event::ItemCreated.as_str(),
        item_id = %item.id,
        store_id = %item.store_id,
    );
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<String>,
    payload: Result<Json<ItemUpdate>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(changes) = payload?;
    changes.validate()?;

    let item = state
        .database
        .run(move |conn| items::update(conn, &item_id, &changes))
        .await
        .map_err(|err| match err {
            StorageError::Unique(_) => ApiError::conflict(ITEM_NAME_TAKEN),
            StorageError::Check(msg) => ApiError::Validation(msg),
            other => ApiError::internal(other),
        })?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;

    tracing::info!(event = Event::ItemUpdated.as_str(), item_id = %item.id);
    Ok(Json(item))
}

async fn delete_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = item_id.clone();
    let deleted = state
        .database
        .run(move |conn| items::delete(conn, &id))
        .await
        .map_err(ApiError::internal)?;

    if !deleted {
        return Err(ApiError::not_found(ITEM_NOT_FOUND));
    }

    tracing::info!(event = Event::ItemDeleted.as_str(), item_id = %item_id);
    Ok(Json(MessageResponse::new("Item deleted.")))
}
