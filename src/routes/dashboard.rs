use std::time::Duration;

use axum::{Router, extract::State, response::Html, routing::get};

use crate::state::SharedState;

const DASHBOARD_TEMPLATE: &str = include_str!("../../assets/dashboard.html");
const POLL_INTERVAL_PLACEHOLDER: &str = "__POLL_INTERVAL_MS__";

/// Serve the HTML dashboard that polls the scoreboard endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(dashboard))
}

/// Render the dashboard page with the configured refresh period.
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    Html(render_dashboard(state.config().poll_interval()))
}

fn render_dashboard(poll_interval: Duration) -> String {
    DASHBOARD_TEMPLATE.replace(
        POLL_INTERVAL_PLACEHOLDER,
        &poll_interval.as_millis().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_interval_is_injected() {
        let page = render_dashboard(Duration::from_millis(2_500));
        assert!(page.contains("const POLL_INTERVAL_MS = 2500;"));
        assert!(!page.contains(POLL_INTERVAL_PLACEHOLDER));
    }
}
