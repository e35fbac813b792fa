use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Probe the score store and report "degraded" when it does not answer.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check().await {
        Ok(()) => HealthResponse::from_store_probe(true),
        Err(err) => {
            warn!(error = %err, "score store health check failed");
            HealthResponse::from_store_probe(false)
        }
    }
}
