use serde::{Deserialize, Serialize};

/// One recorded round result, as persisted by the score store.
///
/// Events are append-only: the store never edits or deletes a row, and the
/// relative order of two events for the same team is their insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEventEntity {
    /// Free-form label of the game session the score belongs to.
    pub session_label: String,
    /// Team identifier; the aggregation key.
    pub team_code: String,
    /// Score reached by the team at this round.
    pub score: i64,
}

impl ScoreEventEntity {
    /// Build a new event ready to be appended.
    pub fn new(
        session_label: impl Into<String>,
        team_code: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            session_label: session_label.into(),
            team_code: team_code.into(),
            score,
        }
    }
}
