//! Ranking and results.
//!
//! Both views are derived on demand from a session and never mutate it.

mod ranking;
mod summary;

pub use ranking::{Leaderboard, Participant, Standing, TEACHER_NAME};
pub use summary::GameSummary;
