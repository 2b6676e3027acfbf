//! Data transfer objects for HTTP message serialization.

use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// API index returned from the root route.
#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

/// Routes exposed by this service.
#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub chat: &'static str,
    pub chat_stream: &'static str,
    pub health: &'static str,
}
