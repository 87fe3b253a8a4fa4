// src/routes/mod.rs
pub mod chat;

use axum::{Router, routing::post};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}
