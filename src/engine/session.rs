//! The quiz session: one game's teams, questions, turn state, and history.
//!
//! A `Session` owns everything about a game. There is no ambient state: the
//! host holds the session and feeds it one signal at a time. Every
//! transition either applies completely or returns an error and leaves the
//! session untouched.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup --start--> Playing --last question resolved--> Completed
//!   ^                 |                                    |
//!   +------reset------+----------------reset---------------+
//! ```
//!
//! `restart` clears the counters and goes straight back to `Playing` with the
//! same roster and a reshuffled copy of the same questions.

use im::Vector;
use tracing::{debug, info, warn};

use super::rotation::{Pass, Rotation};
use super::Transition;
use crate::core::config::QuizConfig;
use crate::core::error::{ConfigError, QuizError, TransitionError};
use crate::core::rng::GameRng;
use crate::core::signal::{Signal, SignalRecord};
use crate::core::state::{Phase, Progress, PublicState};
use crate::core::team::{apply_delta, Team, TeamId, TeamMap};
use crate::leaderboard::{GameSummary, Leaderboard};
use crate::questions::{select_questions, Question, QuestionSource};

/// A single quiz game.
#[derive(Clone, Debug)]
pub struct Session {
    config: QuizConfig,
    phase: Phase,
    teams: TeamMap<Team>,
    teacher_score: Option<u32>,
    questions: Vector<Question>,
    question_index: usize,
    rotation: Rotation,
    answer_revealed: bool,
    history: Vector<SignalRecord>,
    rng: GameRng,
}

impl Session {
    /// Create a session in `Setup` with its roster built from `config`.
    pub fn new(config: QuizConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let teams = build_roster(&config, None);
        let rotation = Rotation::new(config.team_count);
        Ok(Self {
            teacher_score: config.teacher_participant.then_some(0),
            rng: GameRng::new(config.seed),
            config,
            phase: Phase::Setup,
            teams,
            questions: Vector::new(),
            question_index: 0,
            rotation,
            answer_revealed: false,
            history: Vector::new(),
        })
    }

    /// Create a session and start it immediately.
    ///
    /// ```
    /// use classroom_quiz::{Phase, QuestionBank, QuizConfig, Session};
    ///
    /// let bank = QuestionBank::builtin();
    /// let session = Session::configure(QuizConfig::new().with_seed(7), &bank).unwrap();
    ///
    /// assert_eq!(session.phase(), Phase::Playing);
    /// assert_eq!(session.questions().len(), 30);
    /// ```
    pub fn configure<S>(config: QuizConfig, source: &S) -> Result<Self, ConfigError>
    where
        S: QuestionSource + ?Sized,
    {
        let mut session = Self::new(config)?;
        session.begin(source)?;
        Ok(session)
    }

    /// Source the questions and move from `Setup` to `Playing`.
    ///
    /// On a configuration error the session stays in `Setup`.
    pub fn start<S>(&mut self, source: &S) -> Result<Transition, QuizError>
    where
        S: QuestionSource + ?Sized,
    {
        self.require_phase(Phase::Setup)?;
        let question_count = self.begin(source)?;
        Ok(Transition::Started { question_count })
    }

    fn begin<S>(&mut self, source: &S) -> Result<usize, ConfigError>
    where
        S: QuestionSource + ?Sized,
    {
        self.config.validate()?;
        let questions = select_questions(&self.config, source, &mut self.rng).inspect_err(|e| {
            warn!(error = %e, "quiz configuration rejected");
        })?;

        self.questions = questions.into_iter().collect();
        self.enter_play();
        info!(
            teams = self.teams.team_count(),
            questions = self.questions.len(),
            "quiz started"
        );
        Ok(self.questions.len())
    }

    fn enter_play(&mut self) {
        self.phase = Phase::Playing;
        self.question_index = 0;
        self.rotation = Rotation::new(self.teams.team_count());
        self.answer_revealed = false;
        self.history.clear();
    }

    // === Setup ===

    /// Edit the configuration. Only allowed in `Setup`; the roster follows
    /// the new team count and names, keeping existing teams by ordinal.
    pub fn edit_config<F>(&mut self, edit: F) -> Result<(), QuizError>
    where
        F: FnOnce(&mut QuizConfig),
    {
        self.require_phase(Phase::Setup)?;

        let mut config = self.config.clone();
        edit(&mut config);
        config.validate()?;

        self.teams = build_roster(&config, Some(&self.teams));
        self.rotation = Rotation::new(config.team_count);
        self.teacher_score = config.teacher_participant.then_some(0);
        self.rng = GameRng::new(config.seed);
        self.config = config;
        Ok(())
    }

    /// Rename a team. Blank names fall back to the letter label.
    pub fn rename_team(&mut self, team: TeamId, name: &str) -> Result<(), TransitionError> {
        self.require_team(team)?;
        self.teams[team].rename(name);

        let names = &mut self.config.team_names;
        if names.len() <= team.index() {
            names.resize(team.index() + 1, String::new());
        }
        names[team.index()] = name.trim().to_string();
        Ok(())
    }

    // === Gameplay ===

    /// The current team answered correctly: award the question's points and
    /// move to the next question.
    pub fn submit_correct(&mut self) -> Result<Transition, TransitionError> {
        self.require_open_question()?;
        let record = self.pending_record(Signal::Correct);

        let team = self.rotation.current();
        let points = self.questions[self.question_index].points;
        let entry = &mut self.teams[team];
        entry.score = entry.score.saturating_add(points);
        entry.correct_answers += 1;
        entry.total_attempts += 1;

        let progress = self.resolve_question();
        self.history.push_back(record);
        debug!(question = self.question_index, %team, points, ?progress, "correct answer");
        Ok(Transition::Awarded { team, points, progress })
    }

    /// The current team answered incorrectly: charge the attempt and pass
    /// the turn, revealing the answer once every team has tried.
    pub fn submit_wrong(&mut self) -> Result<Transition, TransitionError> {
        self.require_open_question()?;
        let record = self.pending_record(Signal::Wrong);

        let team = self.rotation.current();
        self.teams[team].total_attempts += 1;

        let transition = match self.rotation.pass() {
            Pass::To(next) => Transition::PassedTo(next),
            Pass::Exhausted => {
                self.answer_revealed = true;
                Transition::AnswerRevealed
            }
        };
        self.history.push_back(record);
        debug!(question = self.question_index, %team, ?transition, "wrong answer");
        Ok(transition)
    }

    /// Move past a revealed answer.
    pub fn advance_question(&mut self) -> Result<Transition, TransitionError> {
        self.require_revealed()?;
        let record = self.pending_record(Signal::Advance);

        let progress = self.resolve_question();
        self.history.push_back(record);
        debug!(?progress, "advanced past revealed answer");
        Ok(Transition::Advanced(progress))
    }

    /// Give a revealed question's points to the teacher, then advance.
    pub fn award_teacher(&mut self) -> Result<Transition, TransitionError> {
        self.require_revealed()?;
        let current = self.teacher_score.ok_or(TransitionError::NoTeacherParticipant)?;
        let record = self.pending_record(Signal::AwardTeacher);

        let points = self.questions[self.question_index].points;
        self.teacher_score = Some(current.saturating_add(points));

        let progress = self.resolve_question();
        self.history.push_back(record);
        debug!(points, ?progress, "teacher awarded");
        Ok(Transition::TeacherAwarded { points, progress })
    }

    /// Manually add `delta` to a team's score, flooring at 0. Answer
    /// counters are untouched.
    pub fn adjust_score(&mut self, team: TeamId, delta: i64) -> Result<Transition, TransitionError> {
        self.require_phase(Phase::Playing)?;
        self.require_team(team)?;
        let record = self.pending_record(Signal::AdjustScore { team, delta });

        self.teams[team].adjust_score(delta);
        let score = self.teams[team].score;
        self.history.push_back(record);
        debug!(%team, delta, score, "score adjusted");
        Ok(Transition::ScoreAdjusted { team, score })
    }

    /// Manually add `delta` to the teacher's score, flooring at 0.
    pub fn adjust_teacher_score(&mut self, delta: i64) -> Result<Transition, TransitionError> {
        self.require_phase(Phase::Playing)?;
        let current = self.teacher_score.ok_or(TransitionError::NoTeacherParticipant)?;
        let record = self.pending_record(Signal::AdjustTeacherScore { delta });

        let score = apply_delta(current, delta);
        self.teacher_score = Some(score);
        self.history.push_back(record);
        debug!(delta, score, "teacher score adjusted");
        Ok(Transition::TeacherScoreAdjusted { score })
    }

    /// Return to `Setup`: counters, indices, questions and history are
    /// cleared; the roster and its names are kept.
    pub fn reset(&mut self) -> Transition {
        self.clear_counters();
        self.phase = Phase::Setup;
        self.questions.clear();
        self.question_index = 0;
        self.rotation.reset();
        self.answer_revealed = false;
        self.history.clear();
        info!("quiz reset to setup");
        Transition::Reset
    }

    /// Clear counters and play again with the same roster and a reshuffled
    /// copy of this session's questions.
    pub fn restart(&mut self) -> Result<Transition, TransitionError> {
        if self.phase == Phase::Setup {
            return Err(TransitionError::WrongPhase {
                expected: Phase::Playing,
                actual: Phase::Setup,
            });
        }

        self.clear_counters();
        let mut questions: Vec<Question> = self.questions.iter().cloned().collect();
        self.rng.shuffle(&mut questions);
        self.questions = questions.into_iter().collect();
        self.enter_play();

        let question_count = self.questions.len();
        info!(questions = question_count, "quiz restarted");
        Ok(Transition::Restarted { question_count })
    }

    /// Dispatch a signal to its transition.
    pub fn apply(&mut self, signal: Signal) -> Result<Transition, TransitionError> {
        match signal {
            Signal::Correct => self.submit_correct(),
            Signal::Wrong => self.submit_wrong(),
            Signal::Advance => self.advance_question(),
            Signal::AwardTeacher => self.award_teacher(),
            Signal::AdjustScore { team, delta } => self.adjust_score(team, delta),
            Signal::AdjustTeacherScore { delta } => self.adjust_teacher_score(delta),
            Signal::Reset => Ok(self.reset()),
            Signal::Restart => self.restart(),
        }
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The open question while playing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Playing => self.questions.get(self.question_index),
            _ => None,
        }
    }

    /// The team whose turn it is while playing.
    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        match self.phase {
            Phase::Playing => self.teams.get(self.rotation.current()),
            _ => None,
        }
    }

    /// Ranked view of teams (and the teacher, if enabled).
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::new(&self.teams, self.teacher_score)
    }

    /// Results of a completed game.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        (self.phase == Phase::Completed).then(|| GameSummary::from_session(self))
    }

    /// Snapshot of the turn state.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            phase: self.phase,
            question_index: self.question_index,
            question_count: self.questions.len(),
            current_team: self.rotation.current(),
            starting_team: self.rotation.starting(),
            answer_revealed: self.answer_revealed,
        }
    }

    /// Check if every team has failed the open question.
    #[must_use]
    pub fn is_answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Index of the open question.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// This session's questions in play order.
    #[must_use]
    pub fn questions(&self) -> &Vector<Question> {
        &self.questions
    }

    /// All teams in creation order.
    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    /// Look up a team.
    #[must_use]
    pub fn team(&self, team: TeamId) -> Option<&Team> {
        self.teams.get(team)
    }

    /// Teacher participant's score, if enabled.
    #[must_use]
    pub fn teacher_score(&self) -> Option<u32> {
        self.teacher_score
    }

    /// Accepted signals since the current round started.
    #[must_use]
    pub fn history(&self) -> &Vector<SignalRecord> {
        &self.history
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    // === Internals ===

    fn resolve_question(&mut self) -> Progress {
        self.answer_revealed = false;
        if self.question_index + 1 < self.questions.len() {
            self.question_index += 1;
            let starting_team = self.rotation.next_question();
            Progress::Question {
                index: self.question_index,
                starting_team,
            }
        } else {
            self.phase = Phase::Completed;
            info!(questions = self.questions.len(), "quiz completed");
            Progress::Completed
        }
    }

    fn pending_record(&self, signal: Signal) -> SignalRecord {
        SignalRecord::new(
            self.history.len() as u32,
            self.question_index,
            self.rotation.current(),
            signal,
        )
    }

    fn clear_counters(&mut self) {
        for team in self.teams.values_mut() {
            team.reset();
        }
        if self.teacher_score.is_some() {
            self.teacher_score = Some(0);
        }
    }

    fn require_phase(&self, expected: Phase) -> Result<(), TransitionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn require_team(&self, team: TeamId) -> Result<(), TransitionError> {
        if self.teams.contains(team) {
            Ok(())
        } else {
            Err(TransitionError::UnknownTeam {
                team,
                team_count: self.teams.team_count(),
            })
        }
    }

    fn require_open_question(&self) -> Result<(), TransitionError> {
        self.require_phase(Phase::Playing)?;
        if self.answer_revealed {
            return Err(TransitionError::AnswerRevealed);
        }
        Ok(())
    }

    fn require_revealed(&self) -> Result<(), TransitionError> {
        self.require_phase(Phase::Playing)?;
        if !self.answer_revealed {
            return Err(TransitionError::AnswerNotRevealed);
        }
        Ok(())
    }
}

/// Build a roster for `config`, carrying over teams from `previous` by
/// ordinal.
fn build_roster(config: &QuizConfig, previous: Option<&TeamMap<Team>>) -> TeamMap<Team> {
    TeamMap::new(config.team_count, |id| {
        let mut team = previous
            .and_then(|p| p.get(id))
            .cloned()
            .unwrap_or_else(|| Team::new(id));
        if let Some(name) = config.team_name(id.index()) {
            team.rename(name);
        }
        team
    })
}
