use std::path::PathBuf;
use std::sync::Arc;

use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::items::ItemStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub public_dir: PathBuf,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(serde_json::json!({ "status": "ok" }))
}

/// Browser cross-origin negotiation: succeeds with an empty body for every
/// verb and header, on every route.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
