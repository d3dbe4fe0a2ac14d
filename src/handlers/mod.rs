pub mod book;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::services::client::BOOK_PATH;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(BOOK_PATH, post(book::book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
