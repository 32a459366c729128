use axum::{Router, routing::get};

use super::handler;
use crate::handler::{AppState, preflight};

pub fn routes() -> Router<AppState> {
    Router::new().route("/models", get(handler::list_models).options(preflight))
}
