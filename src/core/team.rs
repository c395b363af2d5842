//! Team identification, per-team storage, and team records.
//!
//! ## TeamId
//!
//! Stable ordinal (0-based) assigned at setup. Never reused mid-game.
//!
//! ## TeamMap
//!
//! Per-team data storage backed by `Vec` for O(1) access, indexed by `TeamId`.
//!
//! ## Team
//!
//! Display name plus the counters gameplay mutates: score, correct answers,
//! and attempts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::MAX_TEAMS;

/// Team identifier: the team's creation ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team after this one in rotation order.
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }

    /// Default display label: "A", "B", ... Ordinals past "Z" render as
    /// `#n` (1-based).
    #[must_use]
    pub fn letter(self) -> String {
        (b'A'..=b'Z')
            .nth(self.index())
            .map_or_else(|| format!("#{}", self.index() + 1), |c| char::from(c).to_string())
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    ///
    /// ```
    /// use classroom_quiz::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.letter())
    }
}

/// Per-team data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per team, in creation order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        debug_assert!(team_count <= MAX_TEAMS, "At most {MAX_TEAMS} teams supported");

        let data = TeamId::all(team_count).map(factory).collect();
        Self { data }
    }

    /// Get the number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `team` addresses an entry in this map.
    #[must_use]
    pub fn contains(&self, team: TeamId) -> bool {
        team.index() < self.data.len()
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> Option<&T> {
        self.data.get(team.index())
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> Option<&mut T> {
        self.data.get_mut(team.index())
    }

    /// Iterate over (TeamId, &T) pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Iterate mutably over all entries.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all values in creation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        &self.data[team.index()]
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        &mut self.data[team.index()]
    }
}

/// A competing team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Creation ordinal.
    pub id: TeamId,

    /// Display name (defaults to the letter label).
    pub name: String,

    /// Current score, never negative.
    pub score: u32,

    /// Questions this team answered correctly.
    pub correct_answers: u32,

    /// Attempts made, correct or not.
    pub total_attempts: u32,
}

impl Team {
    /// Create a team with the default letter name and zeroed counters.
    #[must_use]
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            name: id.letter(),
            score: 0,
            correct_answers: 0,
            total_attempts: 0,
        }
    }

    /// Set the display name. Blank names fall back to the letter label.
    pub fn rename(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            self.id.letter()
        } else {
            trimmed.to_string()
        };
    }

    /// Accuracy as a rounded percentage; 0 when the team never attempted.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.correct_answers, self.total_attempts)
    }

    /// Apply a signed delta to the score, flooring at 0.
    pub fn adjust_score(&mut self, delta: i64) {
        self.score = apply_delta(self.score, delta);
    }

    /// Zero every counter, keeping identity and name.
    pub fn reset(&mut self) {
        self.score = 0;
        self.correct_answers = 0;
        self.total_attempts = 0;
    }
}

/// `round(correct / attempts × 100)`, 0 when there were no attempts.
#[must_use]
pub fn accuracy_percent(correct: u32, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(attempts) * 100.0).round() as u32
}

/// Add a signed delta to a score, clamped into `0..=u32::MAX`.
#[must_use]
pub fn apply_delta(score: u32, delta: i64) -> u32 {
    (i64::from(score).saturating_add(delta)).clamp(0, i64::from(u32::MAX)) as u32
}
