//! The turn-based quiz engine.
//!
//! - `Session`: owns one game and applies signals to it
//! - `Rotation`: whose turn it is within a question and who opens the next
//! - `SignalQueue`: serializes signals from several input sources
//!
//! Transitions report what happened as a `Transition` so the presentation
//! layer can react without diffing state.

mod queue;
mod rotation;
mod session;

pub use queue::SignalQueue;
pub use rotation::{Pass, Rotation};
pub use session::Session;

use serde::{Deserialize, Serialize};

use crate::core::state::Progress;
use crate::core::team::TeamId;

/// Outcome of a successfully applied signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Questions sourced; play begins at question 0 with team 0.
    Started { question_count: usize },

    /// `team` answered correctly and earned `points`.
    Awarded {
        team: TeamId,
        points: u32,
        progress: Progress,
    },

    /// Wrong answer; the turn moved to another team.
    PassedTo(TeamId),

    /// Wrong answer from the last team to try; the answer is showing.
    AnswerRevealed,

    /// Moved past a revealed answer.
    Advanced(Progress),

    /// The teacher took a revealed question's points.
    TeacherAwarded { points: u32, progress: Progress },

    /// Manual score correction applied.
    ScoreAdjusted { team: TeamId, score: u32 },

    /// Manual teacher score correction applied.
    TeacherScoreAdjusted { score: u32 },

    /// Back in setup.
    Reset,

    /// Play restarted with the same roster and questions.
    Restarted { question_count: usize },
}

impl Transition {
    /// Where play went, if this transition resolved a question.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match *self {
            Transition::Awarded { progress, .. }
            | Transition::TeacherAwarded { progress, .. }
            | Transition::Advanced(progress) => Some(progress),
            _ => None,
        }
    }

    /// Check if this transition ended the game.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.progress() == Some(Progress::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_extraction() {
        let done = Transition::Advanced(Progress::Completed);
        assert!(done.completed());

        let next = Transition::Awarded {
            team: TeamId::new(0),
            points: 10,
            progress: Progress::Question { index: 1, starting_team: TeamId::new(1) },
        };
        assert!(!next.completed());
        assert!(next.progress().is_some());

        assert_eq!(Transition::PassedTo(TeamId::new(1)).progress(), None);
    }
}
