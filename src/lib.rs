//! # classroom-quiz
//!
//! A turn-based, multi-team quiz engine for running trivia in a classroom.
//!
//! ## Design Principles
//!
//! 1. **Explicit Sessions**: All game state lives in a `Session` the host
//!    owns. There are no globals; two sessions never interfere.
//!
//! 2. **Signals In, Transitions Out**: Every change is one `Signal` applied
//!    to completion. Illegal signals return a typed error and change nothing.
//!
//! 3. **Presentation-Agnostic**: Question text is a `Text` (literal or lookup
//!    key with fallback) that the host resolves; the engine never renders.
//!
//! ## Modules
//!
//! - `core`: Team IDs and records, configuration, signals, phases, errors, RNG
//! - `questions`: Question records, the built-in bank, custom authoring, selection
//! - `engine`: The session state machine, turn rotation, signal queue
//! - `leaderboard`: Rankings and end-of-game summaries
//!
//! ## Example
//!
//! ```
//! use classroom_quiz::{Phase, QuestionBank, QuizConfig, Session, Transition};
//!
//! let bank = QuestionBank::builtin();
//! let config = QuizConfig::new().with_team_count(3).with_seed(42);
//! let mut session = Session::new(config).unwrap();
//!
//! session.start(&bank).unwrap();
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // Team A misses, Team B gets it.
//! session.submit_wrong().unwrap();
//! let t = session.submit_correct().unwrap();
//! assert!(matches!(t, Transition::Awarded { .. }));
//!
//! let board = session.leaderboard();
//! assert_eq!(board.leader().unwrap().name, "B");
//! ```

pub mod core;
pub mod engine;
pub mod leaderboard;
pub mod questions;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, Phase, Progress, PublicState, QuizConfig, QuizError,
    Signal, SignalRecord, SourceMode, Team, TeamId, TeamMap, TransitionError,
};

pub use crate::questions::{
    CategoryId, CustomQuestionDraft, CustomQuestions, Difficulty, Question, QuestionBank,
    QuestionId, QuestionSource, Text,
};

pub use crate::engine::{Session, SignalQueue, Transition};

pub use crate::leaderboard::{GameSummary, Leaderboard, Participant, Standing};
