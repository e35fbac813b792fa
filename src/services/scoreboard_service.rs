//! Read and write operations exposed to the routing layer.
//!
//! Every call works on a fresh snapshot of the score log; nothing derived is
//! cached. The team color registry is the only state carried across calls.

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::{
    dao::models::ScoreEventEntity,
    error::ServiceError,
    services::{
        leaderboard::{LeaderboardRow, build_leaderboard},
        series::{SeriesSet, build_series},
    },
    state::{SharedState, colors::TeamColor},
};

/// Both derived views computed from the same snapshot of the score log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardSnapshot {
    pub leaderboard: Vec<LeaderboardRow>,
    pub series: SeriesSet,
}

/// Persist one score, then register the team color and return the refreshed views.
///
/// `session_label` falls back to the configured label when absent or blank.
/// The color is registered only once the store acknowledged the write, so a
/// failed first write leaves no trace in the registry.
pub async fn record_score(
    state: &SharedState,
    team_code: &str,
    score: i64,
    session_label: Option<&str>,
) -> Result<ScoreboardSnapshot, ServiceError> {
    let team_code = team_code.trim();
    if team_code.is_empty() {
        return Err(ServiceError::InvalidInput("team code must not be empty".into()));
    }

    let session_label = session_label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| state.config().session_label());

    let event = ScoreEventEntity::new(session_label, team_code, score);
    if let Err(err) = state.store().append(event).await {
        warn!(team = %team_code, score, error = %err, "failed to persist score");
        return Err(ServiceError::StoreWrite(err));
    }
    info!(team = %team_code, score, session = %session_label, "score recorded");

    state.colors().lock().await.color_for(team_code);

    let events = load_events(state).await?;
    let leaderboard = build_leaderboard(&events);
    let series = series_with_colors(state, &events).await;
    Ok(ScoreboardSnapshot {
        leaderboard,
        series,
    })
}

/// Best score per team, highest first.
pub async fn get_leaderboard(state: &SharedState) -> Result<Vec<LeaderboardRow>, ServiceError> {
    let events = load_events(state).await?;
    Ok(build_leaderboard(&events))
}

/// Round-aligned series for every team, colored through the shared registry.
pub async fn get_series(state: &SharedState) -> Result<SeriesSet, ServiceError> {
    let events = load_events(state).await?;
    Ok(series_with_colors(state, &events).await)
}

/// Colors assigned so far, in first-seen order.
pub async fn get_colors(state: &SharedState) -> IndexMap<String, TeamColor> {
    state.colors().lock().await.snapshot()
}

async fn load_events(state: &SharedState) -> Result<Vec<ScoreEventEntity>, ServiceError> {
    state.store().list_events().await.map_err(|err| {
        warn!(error = %err, "failed to read score log");
        ServiceError::StoreRead(err)
    })
}

async fn series_with_colors(state: &SharedState, events: &[ScoreEventEntity]) -> SeriesSet {
    let mut colors = state.colors().lock().await;
    build_series(events, |team_code| colors.color_for(team_code))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::{TryFutureExt, future::BoxFuture};

    use super::*;
    use crate::{
        config::AppConfig,
        dao::{
            score_store::{ScoreStore, memory::MemoryScoreStore},
            storage::{StorageError, StorageResult},
        },
        state::{AppState, colors::PALETTE},
    };

    /// Store whose writes always fail while reads serve a fixed log.
    struct ReadOnlyStore(MemoryScoreStore);

    impl ScoreStore for ReadOnlyStore {
        fn append(&self, _event: ScoreEventEntity) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async {
                Err(StorageError::write(
                    "database is locked".into(),
                    std::io::Error::other("locked"),
                ))
            })
        }

        fn list_events(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEventEntity>>> {
            self.0.list_events()
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            self.0.health_check()
        }
    }

    /// Store that cannot be reached at all.
    struct UnreachableStore;

    impl ScoreStore for UnreachableStore {
        fn append(&self, _event: ScoreEventEntity) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async {
                Err(StorageError::write(
                    "unreachable".into(),
                    std::io::Error::other("no route"),
                ))
            })
        }

        fn list_events(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEventEntity>>> {
            Box::pin(async {
                Err(StorageError::read(
                    "unreachable".into(),
                    std::io::Error::other("no route"),
                ))
            })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(self.list_events().map_ok(|_| ()))
        }
    }

    fn memory_state() -> SharedState {
        AppState::new(Arc::new(MemoryScoreStore::new()), AppConfig::default())
    }

    #[tokio::test]
    async fn recorded_scores_feed_both_views() {
        let state = memory_state();
        for (code, score) in [("A", 10), ("B", 12), ("A", 15)] {
            record_score(&state, code, score, None).await.unwrap();
        }
        let snapshot = record_score(&state, "B", 17, Some("Game 1")).await.unwrap();

        assert_eq!(
            snapshot.leaderboard,
            vec![
                LeaderboardRow {
                    team_code: "B".into(),
                    best_score: 17
                },
                LeaderboardRow {
                    team_code: "A".into(),
                    best_score: 15
                },
            ]
        );
        assert_eq!(snapshot.series.labels, vec![1, 2]);
        assert_eq!(snapshot.series.series[0].points, vec![10, 15]);
        assert_eq!(snapshot.series.series[0].color, PALETTE[0]);
        assert_eq!(snapshot.series.series[1].points, vec![12, 17]);
        assert_eq!(snapshot.series.series[1].color, PALETTE[1]);

        assert_eq!(get_leaderboard(&state).await.unwrap(), snapshot.leaderboard);
        assert_eq!(get_series(&state).await.unwrap(), snapshot.series);
    }

    #[tokio::test]
    async fn colors_follow_write_order_not_read_order() {
        let state = memory_state();
        record_score(&state, "zulu", 1, None).await.unwrap();
        record_score(&state, "alpha", 1, None).await.unwrap();

        let series = get_series(&state).await.unwrap();
        // Reads list teams by code, but colors were fixed when first written.
        assert_eq!(series.series[0].team_code, "alpha");
        assert_eq!(series.series[0].color, PALETTE[1]);
        assert_eq!(series.series[1].color, PALETTE[0]);
    }

    #[tokio::test]
    async fn blank_team_code_is_rejected_before_the_store() {
        let state = memory_state();
        let err = record_score(&state, "   ", 3, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(get_leaderboard(&state).await.unwrap().is_empty());
        assert!(get_colors(&state).await.is_empty());
    }

    #[tokio::test]
    async fn team_code_is_trimmed_and_session_defaults_to_config() {
        let store = MemoryScoreStore::new();
        let state = AppState::new(Arc::new(store.clone()), AppConfig::default());
        record_score(&state, "  Team A ", 4, Some("  ")).await.unwrap();

        let events = store.list_events().await.unwrap();
        assert_eq!(events, vec![ScoreEventEntity::new("default", "Team A", 4)]);
    }

    #[tokio::test]
    async fn failed_write_registers_no_color() {
        let existing = MemoryScoreStore::with_events([ScoreEventEntity::new("g", "known", 5)]);
        let state = AppState::new(Arc::new(ReadOnlyStore(existing)), AppConfig::default());
        get_series(&state).await.unwrap();

        let err = record_score(&state, "newcomer", 9, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::StoreWrite(_)));

        let colors = get_colors(&state).await;
        assert_eq!(colors.len(), 1);
        assert!(colors.contains_key("known"));
        assert!(!colors.contains_key("newcomer"));
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_read_errors_and_keeps_serving() {
        let state = AppState::new(Arc::new(UnreachableStore), AppConfig::default());

        assert!(matches!(
            get_leaderboard(&state).await.unwrap_err(),
            ServiceError::StoreRead(_)
        ));
        assert!(matches!(
            get_series(&state).await.unwrap_err(),
            ServiceError::StoreRead(_)
        ));
        assert!(matches!(
            record_score(&state, "A", 1, None).await.unwrap_err(),
            ServiceError::StoreWrite(_)
        ));
        assert!(get_colors(&state).await.is_empty());
    }

    #[tokio::test]
    async fn empty_log_is_not_an_error() {
        let state = memory_state();
        assert!(get_leaderboard(&state).await.unwrap().is_empty());
        assert_eq!(get_series(&state).await.unwrap(), SeriesSet::default());
    }

    #[tokio::test]
    async fn reads_register_colors_for_teams_already_in_the_store() {
        let store = MemoryScoreStore::with_events([
            ScoreEventEntity::new("g", "B", 1),
            ScoreEventEntity::new("g", "A", 2),
        ]);
        let state = AppState::new(Arc::new(store), AppConfig::default());

        get_leaderboard(&state).await.unwrap();
        assert!(get_colors(&state).await.is_empty());

        get_series(&state).await.unwrap();
        let colors = get_colors(&state).await;
        assert_eq!(colors.get("A"), Some(&PALETTE[0]));
        assert_eq!(colors.get("B"), Some(&PALETTE[1]));
    }
}
