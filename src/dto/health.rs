use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
}

impl HealthResponse {
    /// Build the payload from the outcome of the score store probe.
    pub fn from_store_probe(store_reachable: bool) -> Self {
        let status = if store_reachable { "ok" } else { "degraded" };
        Self {
            status: status.to_string(),
        }
    }
}
