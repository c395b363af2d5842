//! Turn rotation for a single question and across questions.
//!
//! Within a question, attempts pass team to team in rotation order starting
//! at the question's starting team; once the turn wraps back to the starting
//! team every team has had exactly one attempt and the question is exhausted.
//! Across questions, the starting team alternates: it moves one past the
//! previous question's starting team regardless of who answered.

use serde::{Deserialize, Serialize};

use crate::core::team::TeamId;

/// Result of passing the turn after a wrong answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Another team gets to try.
    To(TeamId),
    /// Every team has tried; reveal the answer.
    Exhausted,
}

/// Whose turn it is and who opened the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    team_count: usize,
    current: TeamId,
    starting: TeamId,
}

impl Rotation {
    /// Fresh rotation: team 0 opens the first question.
    #[must_use]
    pub fn new(team_count: usize) -> Self {
        debug_assert!(team_count >= 2, "Rotation needs at least 2 teams");
        Self {
            team_count,
            current: TeamId::new(0),
            starting: TeamId::new(0),
        }
    }

    /// Team whose turn it is.
    #[must_use]
    pub fn current(&self) -> TeamId {
        self.current
    }

    /// Team that opened the current question.
    #[must_use]
    pub fn starting(&self) -> TeamId {
        self.starting
    }

    /// Number of teams rotating.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Pass the turn after a wrong answer.
    pub fn pass(&mut self) -> Pass {
        self.current = self.current.next(self.team_count);
        if self.current == self.starting {
            Pass::Exhausted
        } else {
            Pass::To(self.current)
        }
    }

    /// Open the next question: the starting team alternates and takes the
    /// turn. Returns the new starting team.
    pub fn next_question(&mut self) -> TeamId {
        self.starting = self.starting.next(self.team_count);
        self.current = self.starting;
        self.starting
    }

    /// Back to team 0 opening.
    pub fn reset(&mut self) {
        *self = Self::new(self.team_count);
    }
}
