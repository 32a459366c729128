use axum::{
    Router,
    routing::{get, put},
};

use super::handler;
use crate::handler::{AppState, preflight};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handler::list_items)
                .post(handler::create_item)
                .options(preflight)
                .fallback(handler::unknown_route),
        )
        .route(
            "/items/*id",
            put(handler::update_item)
                .delete(handler::delete_item)
                .options(preflight)
                .fallback(handler::unknown_route),
        )
}
