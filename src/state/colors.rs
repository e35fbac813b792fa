//! Stable per-team color assignment.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Color identifier handed to clients, rendered as a CSS `rgba(..)` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamColor(&'static str);

impl TeamColor {
    pub const BLUE: TeamColor = TeamColor("rgba(54, 162, 235, 1)");
    pub const YELLOW: TeamColor = TeamColor("rgba(255, 159, 64, 1)");
    pub const RED: TeamColor = TeamColor("rgba(255, 71, 87, 1)");
    pub const GREEN: TeamColor = TeamColor("rgba(75, 192, 192, 1)");
    pub const PURPLE: TeamColor = TeamColor("rgba(153, 102, 255, 1)");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for TeamColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Palette handed out in first-seen order. The order decides which team gets which color.
pub const PALETTE: [TeamColor; 5] = [
    TeamColor::BLUE,
    TeamColor::YELLOW,
    TeamColor::RED,
    TeamColor::GREEN,
    TeamColor::PURPLE,
];

/// Remembers the color given to every team code seen so far.
///
/// Assignments never change once made. Past [`PALETTE`]'s length colors are
/// reused cyclically, so two teams may share one.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    assigned: IndexMap<String, TeamColor>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the color of `team_code`, assigning the next palette entry on first sight.
    pub fn color_for(&mut self, team_code: &str) -> TeamColor {
        if let Some(color) = self.assigned.get(team_code) {
            return *color;
        }

        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(team_code.to_owned(), color);
        tracing::debug!(team = %team_code, %color, "assigned team color");
        color
    }

    /// Color already assigned to `team_code`, without registering it.
    pub fn get(&self, team_code: &str) -> Option<TeamColor> {
        self.assigned.get(team_code).copied()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Copy of every assignment, in the order the teams were first seen.
    pub fn snapshot(&self) -> IndexMap<String, TeamColor> {
        self.assigned.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_team_keeps_its_color() {
        let mut registry = ColorRegistry::new();
        let first = registry.color_for("Team A");
        registry.color_for("Team B");
        assert_eq!(registry.color_for("Team A"), first);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn colors_follow_palette_order() {
        let mut registry = ColorRegistry::new();
        let colors: Vec<_> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(|code| registry.color_for(code))
            .collect();
        assert_eq!(colors, PALETTE.to_vec());
    }

    #[test]
    fn palette_wraps_around_after_five_teams() {
        let mut registry = ColorRegistry::new();
        let colors: Vec<_> = ["t1", "t2", "t3", "t4", "t5", "t6", "t7"]
            .into_iter()
            .map(|code| registry.color_for(code))
            .collect();

        assert_eq!(colors[5], colors[0]);
        assert_eq!(colors[6], colors[1]);
        assert_eq!(colors[5], TeamColor::BLUE);
        assert_eq!(colors[6], TeamColor::YELLOW);
    }

    #[test]
    fn get_does_not_register() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.get("ghost"), None);
        assert!(registry.is_empty());

        registry.color_for("ghost");
        assert_eq!(registry.get("ghost"), Some(TeamColor::BLUE));
    }

    #[test]
    fn snapshot_keeps_first_seen_order() {
        let mut registry = ColorRegistry::new();
        registry.color_for("zeta");
        registry.color_for("alpha");

        let snapshot = registry.snapshot();
        let codes: Vec<_> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(codes, ["zeta", "alpha"]);
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            serde_json::json!({
                "zeta": "rgba(54, 162, 235, 1)",
                "alpha": "rgba(255, 159, 64, 1)",
            })
        );
    }
}
