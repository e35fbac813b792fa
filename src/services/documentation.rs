use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scoreboard service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::scoreboard::get_leaderboard,
        crate::routes::scoreboard::get_series,
        crate::routes::scoreboard::get_colors,
        crate::routes::scoreboard::record_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::scoreboard::LeaderboardEntry,
            crate::dto::scoreboard::SeriesEntry,
            crate::dto::scoreboard::SeriesResponse,
            crate::dto::scoreboard::RecordScoreResponse,
            crate::dto::scoreboard::ColorsResponse,
            crate::dto::scoreboard::ScoreForm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scoreboard", description = "Leaderboard, chart series and score submission"),
    )
)]
pub struct ApiDoc;
