//! HTTP route handlers for the assistant server.

pub mod chat;

use axum::Json;

use crate::dto::{ApiIndex, EndpointIndex, HealthResponse};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root endpoint listing the API surface.
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Voltbot product assistant API",
        endpoints: EndpointIndex {
            chat: "POST /api/chat",
            chat_stream: "POST /api/chat/stream",
            health: "GET /health",
        },
    })
}
