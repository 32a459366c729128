//! HTTP Handler for the model index

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::handler::AppState;

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    pub stl: Option<bool>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// The viewer polls this endpoint; stale caches would hide freshly dropped
// model files.
const NO_CACHE: [(header::HeaderName, &str); 2] = [
    (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
    (header::PRAGMA, "no-cache"),
];

pub async fn list_models(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Response {
    let models_dir = super::models_dir(&state.public_dir);
    let include_stl = query.stl.unwrap_or(false);

    match super::discover(&models_dir, include_stl) {
        Ok(models) => {
            tracing::info!(count = models.len(), dir = %models_dir.display(), "scanned models");
            (StatusCode::OK, NO_CACHE, Json(models)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, dir = %models_dir.display(), "failed to scan models");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                NO_CACHE,
                Json(ErrorResponse {
                    error: "Failed to scan models".to_string(),
                }),
            )
                .into_response()
        }
    }
}
