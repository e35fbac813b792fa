//! Reduction of the score log to round-aligned per-team series for charting.

use indexmap::IndexMap;

use crate::{dao::models::ScoreEventEntity, state::colors::TeamColor};

/// Scores of one team, one point per round, padded to the common length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSeries {
    pub team_code: String,
    pub color: TeamColor,
    pub points: Vec<i64>,
}

/// Every team's series plotted against the shared x-axis `labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSet {
    /// Round numbers `1..=N`, `N` being the longest team history.
    pub labels: Vec<usize>,
    pub series: Vec<TeamSeries>,
}

/// Build one series per team, in order of first appearance in `events`.
///
/// A team's round index is the position of the event among that team's own
/// events. Teams with fewer rounds than the longest history hold their last
/// score until they reach `N` points, so every line spans the whole axis.
/// `color_for` is called once per team and may register a new color.
pub fn build_series<F>(events: &[ScoreEventEntity], mut color_for: F) -> SeriesSet
where
    F: FnMut(&str) -> TeamColor,
{
    let mut per_team: IndexMap<&str, Vec<i64>> = IndexMap::new();
    for event in events {
        per_team
            .entry(event.team_code.as_str())
            .or_default()
            .push(event.score);
    }

    let Some(rounds) = per_team.values().map(Vec::len).max() else {
        return SeriesSet::default();
    };

    let series = per_team
        .into_iter()
        .map(|(team_code, mut points)| {
            if let Some(&last) = points.last() {
                points.resize(rounds, last);
            }
            TeamSeries {
                team_code: team_code.to_owned(),
                color: color_for(team_code),
                points,
            }
        })
        .collect();

    SeriesSet {
        labels: (1..=rounds).collect(),
        series,
    }
}
