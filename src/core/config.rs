//! Quiz configuration: teams, question source, and totals.
//!
//! `QuizConfig` mirrors the setup form. Builder methods clamp the way the form
//! does (team count into 2-8, totals on commit), while `validate()` rejects
//! raw values that bypassed the builder, e.g. a deserialized config.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;
use crate::questions::{CategoryId, CustomQuestions};

/// Fewest teams a game can have. One team cannot exhaust a question.
pub const MIN_TEAMS: usize = 2;

/// Most teams a game can have.
pub const MAX_TEAMS: usize = 8;

/// Questions per built-in category.
pub const BUILTIN_BANK_SIZE: usize = 15;

/// Points for a question when none are given.
pub const DEFAULT_POINTS: u32 = 10;

/// Allowed point values for custom questions.
pub const CUSTOM_POINTS: std::ops::RangeInclusive<u32> = 1..=50;

/// Total offered when switching to custom questions (capped by the list size).
pub const DEFAULT_CUSTOM_TOTAL: usize = 20;

/// Where a session's questions come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMode {
    /// Draw from the category bank.
    #[default]
    BuiltIn,
    /// Use the teacher-authored list.
    Custom,
}

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of teams (2-8).
    pub team_count: usize,

    /// Display names by team ordinal. Missing or blank entries use the letter.
    pub team_names: Vec<String>,

    /// Questions to play.
    pub total_questions: usize,

    /// Active question source.
    pub source: SourceMode,

    /// Selected built-in categories, in selection order.
    pub categories: SmallVec<[CategoryId; 4]>,

    /// Authored questions for custom mode.
    pub custom_questions: CustomQuestions,

    /// Include the teacher as an extra leaderboard participant.
    pub teacher_participant: bool,

    /// RNG seed for question draws and ordering.
    pub seed: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        use crate::questions::builtin::{MATHEMATICS, SCIENCE};

        Self {
            team_count: MIN_TEAMS,
            team_names: Vec::new(),
            total_questions: 2 * BUILTIN_BANK_SIZE,
            source: SourceMode::BuiltIn,
            categories: SmallVec::from_slice(&[SCIENCE, MATHEMATICS]),
            custom_questions: CustomQuestions::new(),
            teacher_participant: false,
            seed: 0,
        }
    }
}

impl QuizConfig {
    /// Two teams, science and mathematics, thirty questions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder ===

    /// Set the team count, clamped into 2-8.
    #[must_use]
    pub fn with_team_count(mut self, count: usize) -> Self {
        self.set_team_count(count);
        self
    }

    /// Name a team by ordinal.
    #[must_use]
    pub fn with_team_name(mut self, index: usize, name: impl Into<String>) -> Self {
        if self.team_names.len() <= index {
            self.team_names.resize(index + 1, String::new());
        }
        self.team_names[index] = name.into();
        self
    }

    /// Select built-in categories (replacing the selection) and reset the
    /// total to the full bank for them.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories.clear();
        for category in categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
        self.use_builtin();
        self
    }

    /// Switch to custom mode with the given authored list.
    #[must_use]
    pub fn with_custom_questions(mut self, questions: CustomQuestions) -> Self {
        self.custom_questions = questions;
        self.use_custom();
        self
    }

    /// Set the total directly, committing it as the form would on blur.
    #[must_use]
    pub fn with_total_questions(mut self, total: usize) -> Self {
        self.commit_total_questions(Some(total));
        self
    }

    /// Enable the teacher participant.
    #[must_use]
    pub fn with_teacher_participant(mut self) -> Self {
        self.teacher_participant = true;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    // === Form editing ===

    /// Set the team count, clamped into 2-8.
    pub fn set_team_count(&mut self, count: usize) {
        self.team_count = count.clamp(MIN_TEAMS, MAX_TEAMS);
    }

    /// Add or remove a category. The total resets to `selected × 15`.
    pub fn toggle_category(&mut self, category: CategoryId) {
        if let Some(pos) = self.categories.iter().position(|&c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
        self.total_questions = self.categories.len() * BUILTIN_BANK_SIZE;
    }

    /// Switch to the built-in bank, resetting the total to its maximum.
    pub fn use_builtin(&mut self) {
        self.source = SourceMode::BuiltIn;
        self.total_questions = self.categories.len() * BUILTIN_BANK_SIZE;
    }

    /// Switch to custom questions, resetting the total to
    /// `min(20, authored)`.
    pub fn use_custom(&mut self) {
        self.source = SourceMode::Custom;
        self.total_questions = DEFAULT_CUSTOM_TOTAL.min(self.custom_questions.len());
    }

    /// Upper bound for the total, if the source has one.
    #[must_use]
    pub fn max_total_questions(&self) -> Option<usize> {
        match self.source {
            SourceMode::BuiltIn => Some(self.categories.len() * BUILTIN_BANK_SIZE),
            SourceMode::Custom => None,
        }
    }

    /// Commit an edited total (the form's blur handler).
    ///
    /// Empty or zero becomes `max(selected categories, 1)`; in built-in mode
    /// anything above the bank maximum becomes that maximum.
    pub fn commit_total_questions(&mut self, raw: Option<usize>) {
        let floor = self.categories.len().max(1);
        let mut total = match raw {
            Some(n) if n >= 1 => n,
            _ => floor,
        };
        if let Some(max) = self.max_total_questions() {
            total = total.min(max);
        }
        self.total_questions = total;
    }

    /// Questions each selected category contributes, `floor + 1` for the
    /// first `total mod n` categories.
    #[must_use]
    pub fn category_quotas(&self) -> Vec<(CategoryId, usize)> {
        let quotas = crate::questions::category_quotas(self.total_questions, self.categories.len());
        self.categories.iter().copied().zip(quotas).collect()
    }

    /// Display name for a team ordinal.
    #[must_use]
    pub fn team_name(&self, index: usize) -> Option<&str> {
        self.team_names
            .get(index)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
    }

    /// Reject values the builder would never produce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&self.team_count) {
            return Err(ConfigError::TeamCount {
                requested: self.team_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::builtin::{GENERAL_KNOWLEDGE, HISTORY, MATHEMATICS, SCIENCE};
    use crate::questions::CustomQuestionDraft;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::new();
        assert_eq!(config.team_count, 2);
        assert_eq!(config.total_questions, 30);
        assert_eq!(config.source, SourceMode::BuiltIn);
        assert_eq!(config.categories.as_slice(), &[SCIENCE, MATHEMATICS]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_team_count_clamped() {
        assert_eq!(QuizConfig::new().with_team_count(1).team_count, 2);
        assert_eq!(QuizConfig::new().with_team_count(12).team_count, 8);
        assert_eq!(QuizConfig::new().with_team_count(5).team_count, 5);
    }

    #[test]
    fn test_validate_raw_team_count() {
        let mut config = QuizConfig::new();
        config.team_count = 1;
        assert_eq!(config.validate(), Err(ConfigError::TeamCount { requested: 1 }));

        config.team_count = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toggle_category_resets_total() {
        let mut config = QuizConfig::new().with_categories([SCIENCE]);
        assert_eq!(config.total_questions, 15);

        config.toggle_category(HISTORY);
        assert_eq!(config.categories.as_slice(), &[SCIENCE, HISTORY]);
        assert_eq!(config.total_questions, 30);

        config.toggle_category(SCIENCE);
        assert_eq!(config.categories.as_slice(), &[HISTORY]);
        assert_eq!(config.total_questions, 15);
    }

    #[test]
    fn test_with_categories_dedups() {
        let config = QuizConfig::new().with_categories([HISTORY, HISTORY, GENERAL_KNOWLEDGE]);
        assert_eq!(config.categories.as_slice(), &[HISTORY, GENERAL_KNOWLEDGE]);
        assert_eq!(config.total_questions, 30);
    }

    #[test]
    fn test_commit_total_clamps() {
        let mut config = QuizConfig::new().with_categories([SCIENCE, MATHEMATICS]);

        config.commit_total_questions(Some(31));
        assert_eq!(config.total_questions, 30);

        config.commit_total_questions(Some(0));
        assert_eq!(config.total_questions, 2);

        config.commit_total_questions(None);
        assert_eq!(config.total_questions, 2);

        config.commit_total_questions(Some(17));
        assert_eq!(config.total_questions, 17);
    }

    #[test]
    fn test_commit_total_no_categories() {
        let mut config = QuizConfig::new().with_categories([]);
        config.commit_total_questions(None);
        assert_eq!(config.total_questions, 0);
    }

    #[test]
    fn test_custom_mode_totals() {
        let mut list = CustomQuestions::new();
        for i in 0..3 {
            list.add(&CustomQuestionDraft::new(format!("q{i}"), "a")).unwrap();
        }
        let mut config = QuizConfig::new().with_custom_questions(list);
        assert_eq!(config.source, SourceMode::Custom);
        assert_eq!(config.total_questions, 3);
        assert_eq!(config.max_total_questions(), None);

        config.commit_total_questions(Some(400));
        assert_eq!(config.total_questions, 400);

        config.use_builtin();
        assert_eq!(config.total_questions, 30);
    }

    #[test]
    fn test_quotas() {
        let config = QuizConfig::new()
            .with_categories([SCIENCE, MATHEMATICS])
            .with_total_questions(29);
        assert_eq!(config.category_quotas(), vec![(SCIENCE, 15), (MATHEMATICS, 14)]);
    }

    #[test]
    fn test_team_names() {
        let config = QuizConfig::new().with_team_name(1, "Owls").with_team_name(3, "  ");
        assert_eq!(config.team_name(0), None);
        assert_eq!(config.team_name(1), Some("Owls"));
        assert_eq!(config.team_name(3), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = QuizConfig::new().with_team_count(4).with_seed(9).with_teacher_participant();
        let json = serde_json::to_string(&config).unwrap();
        let back: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
