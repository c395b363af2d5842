//! Core types: teams, configuration, signals, state, errors, RNG.
//!
//! Everything the engine and leaderboard share lives here. None of it knows
//! how questions are sourced or how turns rotate.

pub mod config;
pub mod error;
pub mod rng;
pub mod signal;
pub mod state;
pub mod team;

pub use config::{
    QuizConfig, SourceMode, BUILTIN_BANK_SIZE, CUSTOM_POINTS, DEFAULT_CUSTOM_TOTAL, DEFAULT_POINTS,
    MAX_TEAMS, MIN_TEAMS,
};
pub use error::{ConfigError, QuizError, TransitionError};
pub use rng::GameRng;
pub use signal::{Signal, SignalRecord};
pub use state::{Phase, Progress, PublicState};
pub use team::{accuracy_percent, Team, TeamId, TeamMap};
