/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Best-score-per-team ranking.
pub mod leaderboard;
/// Read and write operations over the score log.
pub mod scoreboard_service;
/// Round-aligned chart series.
pub mod series;
