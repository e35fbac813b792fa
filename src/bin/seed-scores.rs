//! Create the score table in a SQLite file and fill it with a sample game.
//!
//! Usage: `seed-scores [DATABASE_FILE]` (falls back to `$DATABASE_FILE`, then `scores.db`).

use std::{env, path::PathBuf};

use anyhow::Context;
use scoreboard_back::dao::{
    models::ScoreEventEntity,
    score_store::{
        ScoreStore,
        sqlite::{SqliteConfig, SqliteScoreStore},
    },
};

const SAMPLE_SESSION: &str = "Game 1";

const SAMPLE_SCORES: [(&str, i64); 13] = [
    ("Team A", 10),
    ("Team B", 12),
    ("Team A", 15),
    ("Team B", 17),
    ("Team A", 20),
    ("Team B", 30),
    ("Team A", 40),
    ("Team B", 50),
    ("Team B", 50),
    ("Team C", 51),
    ("Team C", 49),
    ("Team C", 48),
    ("Team C", 35),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("DATABASE_FILE").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scores.db"));

    let store = SqliteScoreStore::connect(SqliteConfig::new(&path))
        .await
        .with_context(|| format!("opening `{}`", path.display()))?;

    for (team_code, score) in SAMPLE_SCORES {
        store
            .append(ScoreEventEntity::new(SAMPLE_SESSION, team_code, score))
            .await
            .with_context(|| format!("appending score for `{team_code}`"))?;
    }

    println!(
        "seeded {} scores into {}",
        SAMPLE_SCORES.len(),
        path.display()
    );
    Ok(())
}
