//! Question records - immutable once sourced into a session.
//!
//! Prompt and answer text are either literal strings or lookup keys that the
//! presentation layer resolves (with a fallback literal). The engine never
//! resolves keys itself.

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_POINTS;

/// Stable question identifier (e.g. `sci_3`, `custom_1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    /// Create a new question ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category identifier. Sources define what categories exist.
///
/// Opaque to the engine: used only for filtering and distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Difficulty tag. Display only; scoring uses `Question::points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Teacher-authored question.
    Custom,
}

impl Difficulty {
    /// Points a built-in question of this difficulty is worth.
    #[must_use]
    pub const fn default_points(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
            Difficulty::Custom => DEFAULT_POINTS,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom => "Custom",
        }
    }
}

/// Text shown for a prompt or answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Text {
    /// Render as-is.
    Literal(String),
    /// Translation key, with the literal to show when the key is missing.
    Key { id: String, fallback: String },
}

impl Text {
    /// Literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        Text::Literal(text.into())
    }

    /// Lookup key with a fallback.
    pub fn key(id: impl Into<String>, fallback: impl Into<String>) -> Self {
        Text::Key {
            id: id.into(),
            fallback: fallback.into(),
        }
    }

    /// Resolve with a caller-provided lookup (the presentation layer's
    /// translation table).
    ///
    /// ```
    /// use classroom_quiz::questions::Text;
    ///
    /// let text = Text::key("question_sci_1", "Question not available");
    /// assert_eq!(text.resolve(|_| None), "Question not available");
    /// assert_eq!(text.resolve(|k| Some(format!("<{k}>"))), "<question_sci_1>");
    /// ```
    pub fn resolve<F>(&self, lookup: F) -> String
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match self {
            Text::Literal(text) => text.clone(),
            Text::Key { id, fallback } => lookup(id).unwrap_or_else(|| fallback.clone()),
        }
    }
}

/// A quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier.
    pub id: QuestionId,

    /// What is asked.
    pub prompt: Text,

    /// Revealed once every team has failed.
    pub answer: Text,

    /// Reward for a correct answer, always positive.
    pub points: u32,

    /// Source category. `None` for custom questions.
    pub category: Option<CategoryId>,

    /// Difficulty tag.
    pub difficulty: Difficulty,
}

impl Question {
    /// Create a question with literal text and default points.
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: Text::literal(prompt),
            answer: Text::literal(answer),
            points: DEFAULT_POINTS,
            category: None,
            difficulty: Difficulty::Custom,
        }
    }

    /// Set the point value (builder pattern). Zero is raised to 1.
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points.max(1);
        self
    }

    /// Tag with a category (builder pattern).
    #[must_use]
    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the difficulty tag (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_builder() {
        let q = Question::new("q1", "2 + 2?", "4")
            .with_points(25)
            .in_category(CategoryId::new(1))
            .with_difficulty(Difficulty::Hard);

        assert_eq!(q.id.as_str(), "q1");
        assert_eq!(q.points, 25);
        assert_eq!(q.category, Some(CategoryId::new(1)));
        assert_eq!(q.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_question_defaults() {
        let q = Question::new("q1", "Capital of Odisha?", "Bhubaneswar");
        assert_eq!(q.points, DEFAULT_POINTS);
        assert_eq!(q.category, None);
        assert_eq!(q.difficulty, Difficulty::Custom);
    }

    #[test]
    fn test_zero_points_raised() {
        let q = Question::new("q1", "p", "a").with_points(0);
        assert_eq!(q.points, 1);
    }

    #[test]
    fn test_text_resolve_literal_ignores_lookup() {
        let text = Text::literal("Plain");
        assert_eq!(text.resolve(|_| Some("translated".into())), "Plain");
    }

    #[test]
    fn test_difficulty_points() {
        assert_eq!(Difficulty::Easy.default_points(), 10);
        assert_eq!(Difficulty::Medium.default_points(), 15);
        assert_eq!(Difficulty::Hard.default_points(), 20);
    }

    #[test]
    fn test_question_serialization() {
        let q = Question::new("custom_1", "p", "a");
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
