use axum::{
    Form, Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::scoreboard::{
        ColorsResponse, LeaderboardEntry, RecordScoreResponse, ScoreForm, ScoreSubmission,
        SeriesResponse, into_leaderboard,
    },
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Scoreboard endpoints polled by dashboards, plus the score submission route.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/series", get(get_series))
        .route("/colors", get(get_colors))
        .route("/score", post(record_score))
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Best score per team, highest first", body = [LeaderboardEntry]),
        (status = 503, description = "Score store unavailable")
    )
)]
/// Return the current standings.
pub async fn get_leaderboard(
    State(state): State<SharedState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let rows = scoreboard_service::get_leaderboard(&state).await?;
    Ok(Json(into_leaderboard(rows)))
}

#[utoipa::path(
    get,
    path = "/series",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Per-team score history aligned on rounds", body = SeriesResponse),
        (status = 503, description = "Score store unavailable")
    )
)]
/// Return the chart dataset.
pub async fn get_series(
    State(state): State<SharedState>,
) -> Result<Json<SeriesResponse>, AppError> {
    let set = scoreboard_service::get_series(&state).await?;
    Ok(Json(set.into()))
}

#[utoipa::path(
    get,
    path = "/colors",
    tag = "scoreboard",
    responses((status = 200, description = "Colors assigned to teams so far", body = ColorsResponse))
)]
/// Return the team color map used to tint leaderboard rows.
pub async fn get_colors(State(state): State<SharedState>) -> Json<ColorsResponse> {
    let colors = scoreboard_service::get_colors(&state).await;
    Json(ColorsResponse { colors })
}

#[utoipa::path(
    post,
    path = "/score",
    tag = "scoreboard",
    request_body(content = ScoreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Score recorded; refreshed views", body = RecordScoreResponse),
        (status = 400, description = "Missing team code or non-integer score"),
        (status = 503, description = "Score store unavailable")
    )
)]
/// Record one score and return the refreshed leaderboard and series.
pub async fn record_score(
    State(state): State<SharedState>,
    Form(form): Form<ScoreForm>,
) -> Result<Json<RecordScoreResponse>, AppError> {
    let submission = ScoreSubmission::try_from(form)?;
    let snapshot = scoreboard_service::record_score(
        &state,
        &submission.code,
        submission.score,
        submission.session.as_deref(),
    )
    .await?;
    Ok(Json(snapshot.into()))
}
