//! Deterministic ranking of teams (and optionally the teacher).
//!
//! Order: score descending, then correct answers descending, then creation
//! order. The teacher, when present, counts as created after every team and
//! has no correct answers for tie-breaking.

use serde::{Deserialize, Serialize};

use crate::core::team::{Team, TeamId, TeamMap};

/// Display name for the teacher participant.
pub const TEACHER_NAME: &str = "Teacher Team";

/// Someone who appears on the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    Team(TeamId),
    Teacher,
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub participant: Participant,
    pub name: String,
    pub score: u32,
    pub correct_answers: u32,
    pub total_attempts: u32,
    /// Rounded accuracy percentage. `None` for the teacher.
    pub accuracy: Option<u32>,
}

impl Standing {
    fn team(team: &Team) -> Self {
        Self {
            rank: 0,
            participant: Participant::Team(team.id),
            name: team.name.clone(),
            score: team.score,
            correct_answers: team.correct_answers,
            total_attempts: team.total_attempts,
            accuracy: Some(team.accuracy()),
        }
    }

    fn teacher(score: u32) -> Self {
        Self {
            rank: 0,
            participant: Participant::Teacher,
            name: TEACHER_NAME.to_string(),
            score,
            correct_answers: 0,
            total_attempts: 0,
            accuracy: None,
        }
    }

    /// Check if this row is the teacher.
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.participant == Participant::Teacher
    }
}

/// Read-only ranked view. Building one never touches team state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    standings: Vec<Standing>,
}

impl Leaderboard {
    /// Rank `teams`, appending the teacher when `teacher_score` is set.
    #[must_use]
    pub fn new(teams: &TeamMap<Team>, teacher_score: Option<u32>) -> Self {
        let mut standings: Vec<Standing> = teams.values().map(Standing::team).collect();
        standings.extend(teacher_score.map(Standing::teacher));

        // Stable: equal keys keep creation order.
        standings.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.correct_answers.cmp(&a.correct_answers))
        });
        for (i, standing) in standings.iter_mut().enumerate() {
            standing.rank = i + 1;
        }

        Self { standings }
    }

    /// Rows in rank order.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Iterate rows in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.standings.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    /// Check if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    /// The top row.
    #[must_use]
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Find a participant's row.
    #[must_use]
    pub fn standing(&self, participant: Participant) -> Option<&Standing> {
        self.standings.iter().find(|s| s.participant == participant)
    }

    /// Highest score on the board.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.standings.iter().map(|s| s.score).max().unwrap_or(0)
    }

    /// Score as a percentage of the top score (progress-bar width).
    /// The divisor is at least 1 so an all-zero board yields 0.
    #[must_use]
    pub fn score_share(&self, participant: Participant) -> u32 {
        let Some(standing) = self.standing(participant) else {
            return 0;
        };
        let max = self.max_score().max(1);
        (f64::from(standing.score) / f64::from(max) * 100.0).round() as u32
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a Standing;
    type IntoIter = std::slice::Iter<'a, Standing>;

    fn into_iter(self) -> Self::IntoIter {
        self.standings.iter()
    }
}
