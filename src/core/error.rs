//! Engine error types.
//!
//! - `ConfigError`: the setup form produced something unplayable. The session
//!   stays in `Setup` and the host shows the message.
//! - `TransitionError`: the host sent a signal the current state cannot accept.
//!   These indicate an integration bug and are never silently ignored.

use thiserror::Error;

use super::state::Phase;
use super::team::TeamId;
use crate::questions::CategoryId;

/// Configuration and question-sourcing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Team count must be between 2 and 8, got {requested}")]
    TeamCount { requested: usize },

    #[error("Please select categories or add custom questions to start the quiz")]
    NoQuestions,

    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    #[error("Invalid custom question: {0}")]
    InvalidCustomQuestion(String),
}

/// A gameplay signal that the session's current state does not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Signal requires the {expected:?} phase, session is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("The answer is already revealed; advance to the next question")]
    AnswerRevealed,

    #[error("The answer has not been revealed yet")]
    AnswerNotRevealed,

    #[error("{team} does not exist in a game of {team_count} teams")]
    UnknownTeam { team: TeamId, team_count: usize },

    #[error("This session has no teacher participant")]
    NoTeacherParticipant,
}

/// Umbrella error for callers that mix configuration, play and archiving.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Failed to encode or decode a game summary: {0}")]
    Archive(#[from] bincode::Error),
}

impl QuizError {
    /// Check if this error is a user-facing configuration problem.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, QuizError::Config(_))
    }
}
