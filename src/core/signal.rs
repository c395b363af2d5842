//! Session inputs and their history.
//!
//! Every state change is a response to one `Signal`: a referee judging an
//! answer, a manual score correction, moving past a revealed answer, or a
//! reset. Successful signals are recorded as `SignalRecord`s in order.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// A discrete input to a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// The current team answered correctly.
    Correct,
    /// The current team answered incorrectly.
    Wrong,
    /// Move past a revealed answer.
    Advance,
    /// Give a revealed question's points to the teacher, then advance.
    AwardTeacher,
    /// Manual score correction for a team.
    AdjustScore { team: TeamId, delta: i64 },
    /// Manual score correction for the teacher participant.
    AdjustTeacherScore { delta: i64 },
    /// Back to setup with counters cleared.
    Reset,
    /// Clear counters and start again with the same roster.
    Restart,
}

impl Signal {
    /// Check if this signal judges an answer.
    #[must_use]
    pub fn is_judgement(self) -> bool {
        matches!(self, Signal::Correct | Signal::Wrong)
    }
}

/// A signal the session accepted, with the context it was applied in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Position in the session's history (0-based).
    pub sequence: u32,

    /// Question open when the signal arrived.
    pub question_index: usize,

    /// Team whose turn it was.
    pub team: TeamId,

    /// The signal itself.
    pub signal: Signal,
}

impl SignalRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(sequence: u32, question_index: usize, team: TeamId, signal: Signal) -> Self {
        Self {
            sequence,
            question_index,
            team,
            signal,
        }
    }
}
