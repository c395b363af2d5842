//! End-of-game results.

use serde::{Deserialize, Serialize};

use super::ranking::Standing;
use crate::core::error::QuizError;
use crate::core::signal::Signal;
use crate::engine::Session;

/// Results of a completed game, suitable for the results screen or for
/// archiving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Questions played this round.
    pub questions_asked: usize,

    /// Questions every team missed.
    pub questions_exhausted: usize,

    /// Correct answers across all teams.
    pub total_correct: u32,

    /// `round(Σ team score / team count)`. The teacher is not a team.
    pub average_score: u32,

    /// Final ranking, teacher included when enabled.
    pub standings: Vec<Standing>,

    /// Top of the ranking.
    pub winner: Option<Standing>,
}

impl GameSummary {
    /// Summarize `session` as it stands.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let teams = session.teams();
        let total_correct = teams.values().map(|t| t.correct_answers).sum();
        let total_score: u64 = teams.values().map(|t| u64::from(t.score)).sum();
        let team_count = teams.team_count().max(1) as f64;
        let average_score = (total_score as f64 / team_count).round() as u32;

        let questions_exhausted = session
            .history()
            .iter()
            .filter(|r| matches!(r.signal, Signal::Advance | Signal::AwardTeacher))
            .count();

        let board = session.leaderboard();
        Self {
            questions_asked: session.questions().len(),
            questions_exhausted,
            total_correct,
            average_score,
            winner: board.leader().cloned(),
            standings: board.standings().to_vec(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, QuizError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a summary written by [`GameSummary::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, QuizError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
