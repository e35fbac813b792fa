//! Reduction of the score log to one ranked row per team.

use indexmap::IndexMap;

use crate::dao::models::ScoreEventEntity;

/// Current standing of a team: the best score it has recorded so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub team_code: String,
    pub best_score: i64,
}

/// Build the leaderboard, best score first.
///
/// Teams with equal best scores keep the order in which they first appear in
/// `events`.
pub fn build_leaderboard(events: &[ScoreEventEntity]) -> Vec<LeaderboardRow> {
    let mut best: IndexMap<&str, i64> = IndexMap::new();
    for event in events {
        best.entry(event.team_code.as_str())
            .and_modify(|score| *score = (*score).max(event.score))
            .or_insert(event.score);
    }

    let mut rows: Vec<LeaderboardRow> = best
        .into_iter()
        .map(|(team_code, best_score)| LeaderboardRow {
            team_code: team_code.to_owned(),
            best_score,
        })
        .collect();
    rows.sort_by(|a, b| b.best_score.cmp(&a.best_score));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(raw: &[(&str, i64)]) -> Vec<ScoreEventEntity> {
        raw.iter()
            .map(|(code, score)| ScoreEventEntity::new("game", *code, *score))
            .collect()
    }

    fn rows(raw: &[(&str, i64)]) -> Vec<LeaderboardRow> {
        raw.iter()
            .map(|(code, score)| LeaderboardRow {
                team_code: code.to_string(),
                best_score: *score,
            })
            .collect()
    }

    #[test]
    fn keeps_best_score_per_team_sorted_descending() {
        let board = build_leaderboard(&events(&[("A", 10), ("B", 30), ("A", 20)]));
        assert_eq!(board, rows(&[("B", 30), ("A", 20)]));
    }

    #[test]
    fn later_lower_score_does_not_lower_the_best() {
        let board = build_leaderboard(&events(&[
            ("C", 51),
            ("C", 49),
            ("C", 35),
            ("B", 50),
        ]));
        assert_eq!(board, rows(&[("C", 51), ("B", 50)]));
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let board = build_leaderboard(&events(&[("X", 5), ("Y", 9), ("Z", 5), ("W", 9)]));
        assert_eq!(board, rows(&[("Y", 9), ("W", 9), ("X", 5), ("Z", 5)]));
    }

    #[test]
    fn negative_scores_are_ranked_too() {
        let board = build_leaderboard(&events(&[("A", -3), ("B", -1)]));
        assert_eq!(board, rows(&[("B", -1), ("A", -3)]));
    }

    #[test]
    fn empty_log_gives_empty_board() {
        assert!(build_leaderboard(&[]).is_empty());
    }
}
