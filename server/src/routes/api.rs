use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{chat_handler::chat, process_handler::process};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/process", post(process))
        .with_state(state)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api_routes(state))
}
