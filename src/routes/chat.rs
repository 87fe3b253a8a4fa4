use axum::Json;

use crate::message::{ChatRequest, ChatResponse};

/// Echoes the incoming message inside the fixed reply template.
///
/// A missing or null `msg` substitutes the literal text "undefined", which
/// is what existing clients of this API already receive and parse. A `msg`
/// of any non-string JSON type is rejected by the `Json` extractor before
/// this handler runs.
pub async fn chat_handler(Json(payload): Json<ChatRequest>) -> Json<ChatResponse> {
    let msg = payload.msg.as_deref().unwrap_or("undefined");

    Json(ChatResponse {
        reply: format!("Bot menerima: {msg}"),
    })
}
