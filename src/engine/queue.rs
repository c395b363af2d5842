//! FIFO signal queue.
//!
//! When more than one input source can signal a session (two referees, a
//! remote clicker), they enqueue here and the owner drains the queue into
//! the session. Each signal is applied to completion before the next one is
//! looked at, so the rotation invariants hold no matter how inputs interleave.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session::Session;
use super::Transition;
use crate::core::error::TransitionError;
use crate::core::signal::Signal;

/// Pending signals in arrival order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignalQueue {
    pending: VecDeque<Signal>,
}

impl SignalQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a signal.
    pub fn push(&mut self, signal: Signal) {
        self.pending.push_back(signal);
    }

    /// Number of signals waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply the oldest signal, if any.
    pub fn process_next(&mut self, session: &mut Session) -> Option<Result<Transition, TransitionError>> {
        let signal = self.pending.pop_front()?;
        let result = session.apply(signal);
        if let Err(err) = &result {
            debug!(?signal, error = %err, "queued signal rejected");
        }
        Some(result)
    }

    /// Apply every waiting signal in order. A rejected signal does not stop
    /// the ones behind it.
    pub fn drain_into(&mut self, session: &mut Session) -> Vec<Result<Transition, TransitionError>> {
        let mut results = Vec::with_capacity(self.pending.len());
        while let Some(result) = self.process_next(session) {
            results.push(result);
        }
        results
    }

    /// Drop all waiting signals.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::QuizConfig;
    use crate::core::state::Phase;
    use crate::core::team::TeamId;
    use crate::questions::{CustomQuestionDraft, CustomQuestions, QuestionBank};

    fn session() -> Session {
        let mut list = CustomQuestions::new();
        list.add(&CustomQuestionDraft::new("q1", "a1")).unwrap();
        list.add(&CustomQuestionDraft::new("q2", "a2")).unwrap();
        Session::configure(QuizConfig::new().with_custom_questions(list), &QuestionBank::new()).unwrap()
    }

    #[test]
    fn test_queue_new() {
        let queue = SignalQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_drain_in_order() {
        let mut session = session();
        let mut queue = SignalQueue::new();

        queue.push(Signal::Wrong);
        queue.push(Signal::Correct);
        queue.push(Signal::Advance);
        queue.push(Signal::AdjustScore { team: TeamId::new(0), delta: 5 });
        assert_eq!(queue.pending_count(), 4);

        let results = queue.drain_into(&mut session);

        assert_eq!(results[0], Ok(Transition::PassedTo(TeamId::new(1))));
        assert!(matches!(results[1], Ok(Transition::Awarded { .. })));
        assert_eq!(results[2], Err(TransitionError::AnswerNotRevealed));
        assert_eq!(results[3], Ok(Transition::ScoreAdjusted { team: TeamId::new(0), score: 5 }));
        assert!(queue.is_empty());
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_process_next_empty() {
        let mut session = session();
        let mut queue = SignalQueue::new();
        assert!(queue.process_next(&mut session).is_none());
    }

    #[test]
    fn test_clear() {
        let mut queue = SignalQueue::new();
        queue.push(Signal::Reset);
        queue.clear();
        assert!(queue.is_empty());
    }
}
