pub mod memory;
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

use crate::dao::models::ScoreEventEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the append-only score log.
pub trait ScoreStore: Send + Sync {
    /// Append one event. Must have committed once the future resolves with `Ok`.
    fn append(&self, event: ScoreEventEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Every recorded event, grouped by team code and in insertion order within a team.
    fn list_events(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEventEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
