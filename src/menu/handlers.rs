//! REST API handlers for menu operations
//!
//! This module implements the HTTP endpoints for listing, fetching,
//! creating, updating and deleting menu items.

use super::errors::ApiError;
use super::models::{ListQuery, MenuItem, MenuItemRequest};
use super::state::SharedState;
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu-items", get(list_items).post(create_item))
        .route(
            "/menu-items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Endpoint: GET /menu-items
/// Lists items matching the optional query filters, ascending by id.
async fn list_items(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<MenuItem>> {
    Json(state.list(&query))
}

/// Endpoint: GET /menu-items/{id}
async fn get_item(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<u64>,
) -> Result<Json<MenuItem>, ApiError> {
    state
        .get(id)
        .map(Json)
        .map_err(|err| ApiError::from_menu_error(err, uri.path()))
}

/// Endpoint: POST /menu-items
/// Creates a new item; responds 201 with the stored representation.
async fn create_item(
    State(state): State<SharedState>,
    Json(payload): Json<MenuItemRequest>,
) -> (StatusCode, Json<MenuItem>) {
    let item = state.create(payload);
    (StatusCode::CREATED, Json(item))
}

/// Endpoint: PUT /menu-items/{id}
/// Replaces the stored item wholesale, keeping its id.
async fn update_item(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<u64>,
    Json(payload): Json<MenuItemRequest>,
) -> Result<Json<MenuItem>, ApiError> {
    state
        .update(id, payload)
        .map(Json)
        .map_err(|err| ApiError::from_menu_error(err, uri.path()))
}

/// Endpoint: DELETE /menu-items/{id}
/// Responds 204 with an empty body on success.
async fn delete_item(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete(id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|err| ApiError::from_menu_error(err, uri.path()))
}
