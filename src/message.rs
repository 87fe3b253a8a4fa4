// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub msg: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
