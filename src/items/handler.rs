//! HTTP Handlers for the Items API

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::{CreateItem, UpdateItem};
use crate::handler::AppState;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

fn not_found(msg: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

fn bad_request(msg: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

// The item endpoints match by prefix: the token after the last `/` is the id.
fn parse_id(tail: &str) -> Option<i64> {
    tail.rsplit('/').next()?.parse().ok()
}

/// Method-mismatch fallback for the item routes (e.g. GET on `/items/1`).
pub async fn unknown_route() -> Response {
    not_found("Not found")
}

pub async fn list_items(State(state): State<AppState>) -> Response {
    let items = state.store.list().await;
    tracing::info!(count = items.len(), "listed items");
    success(items)
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return bad_request("Invalid request");
    };

    let item = state.store.create(payload).await;
    tracing::info!(id = item.id, "created item");
    success(item)
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(tail): Path<String>,
    payload: Result<Json<UpdateItem>, JsonRejection>,
) -> Response {
    let Some(id) = parse_id(&tail) else {
        return bad_request("Invalid request");
    };
    let Ok(Json(patch)) = payload else {
        return bad_request("Invalid request");
    };

    match state.store.update(id, patch).await {
        Some(item) => {
            tracing::info!(id = item.id, "updated item");
            success(item)
        }
        None => not_found("Item not found"),
    }
}

pub async fn delete_item(State(state): State<AppState>, Path(tail): Path<String>) -> Response {
    let Some(id) = parse_id(&tail) else {
        return bad_request("Invalid request");
    };

    match state.store.delete(id).await {
        Some(item) => {
            tracing::info!(id = item.id, "deleted item");
            success(item)
        }
        None => not_found("Item not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_takes_the_trailing_segment() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("nested/7"), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
