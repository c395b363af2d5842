//! Teacher-authored question lists.

use serde::{Deserialize, Serialize};

use super::question::{Difficulty, Question, QuestionId, Text};
use crate::core::config::{CUSTOM_POINTS, DEFAULT_POINTS};
use crate::core::error::ConfigError;

/// Unvalidated form input for one custom question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestionDraft {
    pub prompt: String,
    pub answer: String,
    /// `None` uses the default of 10.
    pub points: Option<u32>,
}

impl CustomQuestionDraft {
    /// Create a draft with default points.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            points: None,
        }
    }

    /// Set the point value (builder pattern).
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    fn validate(&self, id: QuestionId) -> Result<Question, ConfigError> {
        let prompt = self.prompt.trim();
        let answer = self.answer.trim();
        if prompt.is_empty() {
            return Err(ConfigError::InvalidCustomQuestion("question text is empty".into()));
        }
        if answer.is_empty() {
            return Err(ConfigError::InvalidCustomQuestion("answer is empty".into()));
        }

        let points = self.points.unwrap_or(DEFAULT_POINTS);
        if !CUSTOM_POINTS.contains(&points) {
            return Err(ConfigError::InvalidCustomQuestion(format!(
                "points must be between {} and {}, got {points}",
                CUSTOM_POINTS.start(),
                CUSTOM_POINTS.end()
            )));
        }

        Ok(Question {
            id,
            prompt: Text::literal(prompt),
            answer: Text::literal(answer),
            points,
            category: None,
            difficulty: Difficulty::Custom,
        })
    }
}

/// Ordered list of custom questions. Authoring order is the order a session
/// truncates to its requested total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestions {
    questions: Vec<Question>,
    next_id: u32,
}

impl CustomQuestions {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> QuestionId {
        self.next_id += 1;
        QuestionId::new(format!("custom_{}", self.next_id))
    }

    /// Validate and append a question, returning its ID.
    pub fn add(&mut self, draft: &CustomQuestionDraft) -> Result<QuestionId, ConfigError> {
        let question = draft.validate(self.alloc_id())?;
        let id = question.id.clone();
        self.questions.push(question);
        Ok(id)
    }

    /// Replace the question at `index` with an edited draft.
    pub fn replace(&mut self, index: usize, draft: &CustomQuestionDraft) -> Result<QuestionId, ConfigError> {
        if index >= self.questions.len() {
            return Err(ConfigError::InvalidCustomQuestion(format!(
                "no custom question at position {index}"
            )));
        }
        let question = draft.validate(self.alloc_id())?;
        let id = question.id.clone();
        self.questions[index] = question;
        Ok(id)
    }

    /// Remove the question at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Question> {
        (index < self.questions.len()).then(|| self.questions.remove(index))
    }

    /// Number of authored questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if nothing has been authored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Authored questions in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over authored questions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
