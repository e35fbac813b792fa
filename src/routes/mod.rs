use axum::Router;

use crate::state::SharedState;

pub mod dashboard;
pub mod docs;
pub mod health;
pub mod scoreboard;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(scoreboard::router())
        .merge(dashboard::router())
        .merge(docs::router())
        .with_state(state)
}
