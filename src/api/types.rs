//! API request and response types.
//!
//! Quote bodies are the domain quote types themselves; only
//! service-level responses live here.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Carrier catalog in use.
    pub catalog: String,
    /// Timestamp.
    pub timestamp: String,
}
