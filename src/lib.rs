use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod items;
pub mod models;
pub mod net;

use handler::AppState;

/// Assembles the full service router: the items API, the model index, the
/// on-disk public tree, the embedded viewer pages, and a permissive CORS
/// layer over every response.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handler::healthcheck).options(handler::preflight))
        .merge(items::routes())
        .nest("/api", models::routes())
        .nest_service("/public", ServeDir::new(&state.public_dir))
        .fallback(assets::serve_embedded)
        .layer(cors)
        .with_state(state)
}
