//! Observable session state.
//!
//! ## Phase
//!
//! `Setup → Playing → Completed`, one-directional except for an explicit
//! reset back to `Setup`.
//!
//! ## PublicState
//!
//! What the presentation layer renders: phase, question position, whose turn
//! it is, and whether the answer is showing.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Coarse lifecycle stage of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Completed,
}

/// Where play moved after a question was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// A new question is open, started by `starting_team`.
    Question { index: usize, starting_team: TeamId },
    /// That was the last question.
    Completed,
}

/// Read-only snapshot of a session's turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Current phase.
    pub phase: Phase,

    /// Index of the open question (0-based).
    pub question_index: usize,

    /// Questions in this session.
    pub question_count: usize,

    /// Team whose turn it is.
    pub current_team: TeamId,

    /// Team that opened the current question.
    pub starting_team: TeamId,

    /// Every team has failed the current question and its answer is showing.
    pub answer_revealed: bool,
}

impl PublicState {
    /// 1-based question number for display.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }

    /// Rounded percentage of questions reached, counting the open one.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.question_count == 0 {
            return 0;
        }
        let reached = match self.phase {
            Phase::Completed => self.question_count,
            _ => self.question_number(),
        };
        ((reached as f64 / self.question_count as f64) * 100.0).round() as u32
    }

    /// Check if the session is accepting gameplay signals.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
