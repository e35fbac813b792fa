//! Error types shared by the SQLite storage implementation.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with the SQLite score log.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The database file could not be opened or configured.
    #[error("failed to open SQLite database `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// Creating the score table or its index failed.
    #[error("failed to ensure the score_events schema")]
    EnsureSchema {
        #[source]
        source: rusqlite::Error,
    },
    /// Inserting a score event failed.
    #[error("failed to append score for team `{team_code}`")]
    Append {
        team_code: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Querying the score log failed.
    #[error("failed to list score events")]
    ListEvents {
        #[source]
        source: rusqlite::Error,
    },
    /// The `SELECT 1` probe failed.
    #[error("SQLite health probe failed")]
    HealthProbe {
        #[source]
        source: rusqlite::Error,
    },
    /// The blocking worker running the statement panicked or was cancelled.
    #[error("SQLite worker task failed")]
    Worker {
        #[source]
        source: tokio::task::JoinError,
    },
}
