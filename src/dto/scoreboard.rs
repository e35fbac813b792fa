//! DTO definitions used by the scoreboard REST API and documentation layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::{
    dto::validation::{parse_score, validate_team_code},
    services::{
        leaderboard::LeaderboardRow,
        scoreboard_service::ScoreboardSnapshot,
        series::{SeriesSet, TeamSeries},
    },
    state::colors::TeamColor,
};

/// One leaderboard line: a team and its best score so far.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub code: String,
    pub score: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            code: row.team_code,
            score: row.best_score,
        }
    }
}

/// One plotted line.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeriesEntry {
    pub team: String,
    /// CSS color assigned to the team.
    pub color: String,
    /// One score per round, same length as the response `labels`.
    pub points: Vec<i64>,
}

impl From<TeamSeries> for SeriesEntry {
    fn from(series: TeamSeries) -> Self {
        Self {
            team: series.team_code,
            color: series.color.to_string(),
            points: series.points,
        }
    }
}

/// Chart dataset: shared round axis plus one line per team.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeriesResponse {
    pub labels: Vec<usize>,
    pub series: Vec<SeriesEntry>,
}

impl From<SeriesSet> for SeriesResponse {
    fn from(set: SeriesSet) -> Self {
        Self {
            labels: set.labels,
            series: set.series.into_iter().map(SeriesEntry::from).collect(),
        }
    }
}

/// Views recomputed right after a score was recorded.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordScoreResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub series: SeriesResponse,
}

impl From<ScoreboardSnapshot> for RecordScoreResponse {
    fn from(snapshot: ScoreboardSnapshot) -> Self {
        Self {
            leaderboard: into_leaderboard(snapshot.leaderboard),
            series: snapshot.series.into(),
        }
    }
}

/// Team colors assigned so far, keyed by team code in first-seen order.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorsResponse {
    #[schema(value_type = Object)]
    pub colors: IndexMap<String, TeamColor>,
}

/// Form submitted to record a score.
///
/// Fields default to empty strings so missing values surface as validation
/// errors rather than extractor rejections.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreForm {
    #[serde(default)]
    pub code: String,
    /// Integer score, sent as text by HTML forms.
    #[serde(default)]
    pub score: String,
    /// Optional session label; the configured one is used when omitted.
    #[serde(default)]
    pub session: Option<String>,
}

/// Validated score submission.
#[derive(Debug, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub code: String,
    pub score: i64,
    pub session: Option<String>,
}

impl TryFrom<ScoreForm> for ScoreSubmission {
    type Error = ValidationErrors;

    fn try_from(form: ScoreForm) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_team_code(&form.code) {
            errors.add("code", e);
        }

        let score = match parse_score(&form.score) {
            Ok(score) => Some(score),
            Err(e) => {
                errors.add("score", e);
                None
            }
        };

        match score {
            Some(score) if errors.is_empty() => Ok(Self {
                code: form.code,
                score,
                session: form.session,
            }),
            _ => Err(errors),
        }
    }
}

/// Convert builder rows into their wire representation.
pub fn into_leaderboard(rows: Vec<LeaderboardRow>) -> Vec<LeaderboardEntry> {
    rows.into_iter().map(LeaderboardEntry::from).collect()
}
