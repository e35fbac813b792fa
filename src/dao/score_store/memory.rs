//! Process-local score log used when no database backend is compiled in, and by tests.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{models::ScoreEventEntity, score_store::ScoreStore, storage::StorageResult};

/// Score store keeping every event in memory for the lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    events: Arc<RwLock<Vec<ScoreEventEntity>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `events`, in the given insertion order.
    pub fn with_events(events: impl IntoIterator<Item = ScoreEventEntity>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events.into_iter().collect())),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&self, event: ScoreEventEntity) -> BoxFuture<'static, StorageResult<()>> {
        let events = self.events.clone();
        Box::pin(async move {
            events.write().await.push(event);
            Ok(())
        })
    }

    fn list_events(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEventEntity>>> {
        let events = self.events.clone();
        Box::pin(async move {
            let mut snapshot = events.read().await.clone();
            // Stable sort keeps insertion order within each team.
            snapshot.sort_by(|a, b| a.team_code.cmp(&b.team_code));
            Ok(snapshot)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
