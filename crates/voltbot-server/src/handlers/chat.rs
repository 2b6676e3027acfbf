//! Chat endpoints: complete replies and SSE streaming.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::info;
use voltbot_agent::{stream_reply, Responder};
use voltbot_core::Message;

use crate::ServerState;

/// Request body shared by both chat endpoints.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Text of the most recent message, or the empty string when the
    /// conversation is empty.
    fn latest_text(&self) -> &str {
        self.messages.last().map(|m| m.content.as_str()).unwrap_or("")
    }
}

/// Response body for the non-streaming chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Chat endpoint - returns the complete reply.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let text = req.latest_text();
    info!("Chat request: {}...", text.get(..50).unwrap_or(text));

    Json(ChatResponse { message: state.responder.respond(text) })
}

/// Streaming chat endpoint - delivers the reply word by word over SSE.
///
/// Each frame is a `data:` line carrying a JSON-encoded
/// [`voltbot_core::StreamEvent`]; the stream closes after the `done` event.
pub async fn chat_stream(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let text = req.latest_text();
    info!("Streaming chat request: {}...", text.get(..50).unwrap_or(text));

    let reply = state.responder.respond(text);
    let events = stream_reply(&reply, state.chunk_delay)
        .map(|event| Ok::<_, Infallible>(Event::default().json_data(&event).unwrap()));

    (
        [(header::CACHE_CONTROL, "no-cache")],
        Sse::new(events).keep_alive(KeepAlive::default()),
    )
}
