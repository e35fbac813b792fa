use std::{path::Path, sync::Arc};

use futures::future::BoxFuture;
use rusqlite::{Connection, params};
use tracing::debug;

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
};
use crate::dao::{
    models::ScoreEventEntity,
    score_store::ScoreStore,
    storage::{StorageError, StorageResult},
};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS score_events (
        session_label TEXT NOT NULL,
        team_code TEXT NOT NULL,
        score INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS score_events_team_code_idx ON score_events (team_code);
";

const INSERT_EVENT: &str =
    "INSERT INTO score_events (session_label, team_code, score) VALUES (?1, ?2, ?3)";

const SELECT_EVENTS: &str = "
    SELECT session_label, team_code, score
    FROM score_events
    ORDER BY team_code ASC, rowid ASC
";

/// Score store backed by a single SQLite table.
///
/// Every call opens its own connection on the blocking pool, so concurrent
/// requests never share a handle and SQLite serializes the writers.
#[derive(Clone)]
pub struct SqliteScoreStore {
    config: Arc<SqliteConfig>,
}

impl SqliteScoreStore {
    /// Open the database file and make sure the score table and index exist.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let config = Arc::new(config);
        let schema_config = config.clone();
        run_blocking(move || {
            let conn = open_connection(&schema_config)?;
            conn.execute_batch(SCHEMA)
                .map_err(|source| SqliteDaoError::EnsureSchema { source })
        })
        .await?;

        debug!(path = %config.path.display(), "SQLite score store ready");
        Ok(Self { config })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl ScoreStore for SqliteScoreStore {
    fn append(&self, event: ScoreEventEntity) -> BoxFuture<'static, StorageResult<()>> {
        let config = self.config.clone();
        Box::pin(async move {
            run_blocking(move || {
                let conn = open_connection(&config)?;
                conn.execute(
                    INSERT_EVENT,
                    params![event.session_label, event.team_code, event.score],
                )
                .map_err(|source| SqliteDaoError::Append {
                    team_code: event.team_code.clone(),
                    source,
                })?;
                Ok(())
            })
            .await
            .map_err(|err| StorageError::write(err.to_string(), err))
        })
    }

    fn list_events(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEventEntity>>> {
        let config = self.config.clone();
        Box::pin(async move {
            run_blocking(move || {
                let conn = open_connection(&config)?;
                select_events(&conn).map_err(|source| SqliteDaoError::ListEvents { source })
            })
            .await
            .map_err(|err| StorageError::read(err.to_string(), err))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let config = self.config.clone();
        Box::pin(async move {
            run_blocking(move || {
                let conn = open_connection(&config)?;
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                    .map_err(|source| SqliteDaoError::HealthProbe { source })?;
                Ok(())
            })
            .await
            .map_err(|err| StorageError::read(err.to_string(), err))
        })
    }
}

fn open_connection(config: &SqliteConfig) -> SqliteResult<Connection> {
    let open_error = |source| SqliteDaoError::Open {
        path: config.path.clone(),
        source,
    };
    let conn = Connection::open(&config.path).map_err(open_error)?;
    conn.busy_timeout(config.busy_timeout).map_err(open_error)?;
    Ok(conn)
}

fn select_events(conn: &Connection) -> rusqlite::Result<Vec<ScoreEventEntity>> {
    let mut stmt = conn.prepare(SELECT_EVENTS)?;
    let rows = stmt.query_map([], |row| {
        Ok(ScoreEventEntity {
            session_label: row.get(0)?,
            team_code: row.get(1)?,
            score: row.get(2)?,
        })
    })?;
    rows.collect()
}

async fn run_blocking<T, F>(work: F) -> SqliteResult<T>
where
    F: FnOnce() -> SqliteResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|source| SqliteDaoError::Worker { source })?
}
