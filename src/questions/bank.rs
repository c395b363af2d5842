//! Question sources and the built-in category bank.
//!
//! `QuestionSource` is the seam between the engine and whatever supplies
//! category-tagged questions. `QuestionBank` is the in-memory implementation;
//! `QuestionBank::builtin()` returns the bundled four-category bank.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::question::{CategoryId, Difficulty, Question, QuestionId, Text};
use crate::core::config::BUILTIN_BANK_SIZE;

/// Provider of category-tagged questions.
pub trait QuestionSource {
    /// Categories in display order.
    fn categories(&self) -> Vec<CategoryId>;

    /// Questions in a category. Empty for unknown categories.
    fn questions(&self, category: CategoryId) -> &[Question];

    /// Whether the source knows this category.
    fn has_category(&self, category: CategoryId) -> bool {
        self.categories().contains(&category)
    }

    /// Questions available per category. Bounds the total a session may ask
    /// for in built-in mode.
    fn bank_size(&self) -> usize {
        BUILTIN_BANK_SIZE
    }
}

/// Category metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub id: CategoryId,
    /// Stable key (e.g. `general_knowledge`).
    pub key: String,
    /// Display name (e.g. "General Knowledge").
    pub name: String,
}

/// Built-in category IDs.
pub mod builtin {
    use super::CategoryId;

    pub const SCIENCE: CategoryId = CategoryId::new(0);
    pub const MATHEMATICS: CategoryId = CategoryId::new(1);
    pub const GENERAL_KNOWLEDGE: CategoryId = CategoryId::new(2);
    pub const HISTORY: CategoryId = CategoryId::new(3);
}

/// In-memory question bank keyed by category.
///
/// ## Example
///
/// ```
/// use classroom_quiz::questions::{CategoryId, Question, QuestionBank, QuestionSource};
///
/// let mut bank = QuestionBank::new();
/// let geo = bank.register_category(CategoryId::new(10), "geography", "Geography");
/// bank.add_question(geo, Question::new("geo_1", "Longest river in Odisha?", "Mahanadi"));
///
/// assert_eq!(bank.questions(geo).len(), 1);
/// assert_eq!(bank.category(geo).unwrap().name, "Geography");
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    order: Vec<CategoryInfo>,
    questions: FxHashMap<CategoryId, Vec<Question>>,
    bank_size: Option<usize>,
}

impl QuestionBank {
    /// Create a new empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled bank: science, mathematics, general knowledge, history,
    /// fifteen questions each.
    #[must_use]
    pub fn builtin() -> Self {
        use Difficulty::{Easy as E, Hard as H, Medium as M};

        const SCIENCE: [Difficulty; BUILTIN_BANK_SIZE] =
            [E, E, M, M, M, E, E, M, M, H, H, H, M, H, H];
        const MATHEMATICS: [Difficulty; BUILTIN_BANK_SIZE] =
            [E, E, M, E, E, M, M, M, H, H, H, E, M, H, H];
        const GENERAL_KNOWLEDGE: [Difficulty; BUILTIN_BANK_SIZE] =
            [E, E, E, E, M, M, M, M, H, H, E, M, H, H, H];
        const HISTORY: [Difficulty; BUILTIN_BANK_SIZE] =
            [E, M, E, E, M, M, M, H, H, E, M, H, H, M, H];

        let mut bank = Self::new();
        let specs = [
            (builtin::SCIENCE, "science", "Science", "sci", SCIENCE),
            (builtin::MATHEMATICS, "mathematics", "Mathematics", "math", MATHEMATICS),
            (
                builtin::GENERAL_KNOWLEDGE,
                "general_knowledge",
                "General Knowledge",
                "gk",
                GENERAL_KNOWLEDGE,
            ),
            (builtin::HISTORY, "history", "History", "hist", HISTORY),
        ];

        for (id, key, name, prefix, difficulties) in specs {
            bank.register_category(id, key, name);
            for (n, difficulty) in difficulties.into_iter().enumerate() {
                let qid = format!("{prefix}_{}", n + 1);
                bank.add_question(
                    id,
                    Question {
                        prompt: Text::key(format!("question_{qid}"), "Question not available"),
                        answer: Text::key(format!("answer_{qid}"), "Answer not available"),
                        id: QuestionId::new(qid),
                        points: difficulty.default_points(),
                        category: Some(id),
                        difficulty,
                    },
                );
            }
        }

        bank
    }

    /// Register a category. Re-registering an ID replaces its metadata and
    /// keeps its position and questions.
    pub fn register_category(
        &mut self,
        id: CategoryId,
        key: impl Into<String>,
        name: impl Into<String>,
    ) -> CategoryId {
        let info = CategoryInfo {
            id,
            key: key.into(),
            name: name.into(),
        };
        match self.order.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = info,
            None => self.order.push(info),
        }
        self.questions.entry(id).or_default();
        id
    }

    /// Add a question to a registered category, tagging it with that category.
    ///
    /// Returns false if the category is unknown.
    pub fn add_question(&mut self, category: CategoryId, mut question: Question) -> bool {
        match self.questions.get_mut(&category) {
            Some(list) => {
                question.category = Some(category);
                list.push(question);
                true
            }
            None => false,
        }
    }

    /// Override the per-category bank size used to bound totals.
    #[must_use]
    pub fn with_bank_size(mut self, size: usize) -> Self {
        self.bank_size = Some(size);
        self
    }

    /// Look up category metadata.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&CategoryInfo> {
        self.order.iter().find(|c| c.id == id)
    }

    /// Look up a category by its key.
    #[must_use]
    pub fn category_by_key(&self, key: &str) -> Option<&CategoryInfo> {
        self.order.iter().find(|c| c.key == key)
    }

    /// Display name for a category, or its key-less fallback.
    #[must_use]
    pub fn display_name(&self, id: CategoryId) -> String {
        self.category(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone())
    }

    /// Total number of questions across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }

    /// Check if the bank holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuestionSource for QuestionBank {
    fn categories(&self) -> Vec<CategoryId> {
        self.order.iter().map(|c| c.id).collect()
    }

    fn questions(&self, category: CategoryId) -> &[Question] {
        self.questions.get(&category).map_or(&[], Vec::as_slice)
    }

    fn has_category(&self, category: CategoryId) -> bool {
        self.questions.contains_key(&category)
    }

    fn bank_size(&self) -> usize {
        self.bank_size.unwrap_or(BUILTIN_BANK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let bank = QuestionBank::builtin();

        assert_eq!(
            bank.categories(),
            vec![
                builtin::SCIENCE,
                builtin::MATHEMATICS,
                builtin::GENERAL_KNOWLEDGE,
                builtin::HISTORY
            ]
        );
        for category in bank.categories() {
            assert_eq!(bank.questions(category).len(), BUILTIN_BANK_SIZE);
        }
        assert_eq!(bank.len(), 60);
        assert_eq!(bank.bank_size(), 15);
    }

    #[test]
    fn test_builtin_question_keys() {
        let bank = QuestionBank::builtin();
        let first = &bank.questions(builtin::SCIENCE)[0];

        assert_eq!(first.id.as_str(), "sci_1");
        assert_eq!(first.prompt, Text::key("question_sci_1", "Question not available"));
        assert_eq!(first.answer, Text::key("answer_sci_1", "Answer not available"));
        assert_eq!(first.points, 10);
        assert_eq!(first.category, Some(builtin::SCIENCE));

        let last = &bank.questions(builtin::HISTORY)[14];
        assert_eq!(last.id.as_str(), "hist_15");
        assert_eq!(last.difficulty, Difficulty::Hard);
        assert_eq!(last.points, 20);
    }

    #[test]
    fn test_display_names() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.display_name(builtin::GENERAL_KNOWLEDGE), "General Knowledge");
        assert_eq!(bank.category_by_key("history").map(|c| c.id), Some(builtin::HISTORY));
        assert_eq!(bank.display_name(CategoryId::new(99)), "Category(99)");
    }

    #[test]
    fn test_unknown_category() {
        let mut bank = QuestionBank::new();
        assert!(bank.questions(CategoryId::new(5)).is_empty());
        assert!(!bank.add_question(CategoryId::new(5), Question::new("x", "p", "a")));
        assert!(!bank.has_category(CategoryId::new(5)));
        assert!(bank.is_empty());
    }

    #[test]
    fn test_reregister_keeps_questions() {
        let mut bank = QuestionBank::new();
        let id = bank.register_category(CategoryId::new(1), "art", "Art");
        bank.add_question(id, Question::new("a1", "p", "a"));
        bank.register_category(id, "art", "Arts & Crafts");

        assert_eq!(bank.categories(), vec![id]);
        assert_eq!(bank.questions(id).len(), 1);
        assert_eq!(bank.display_name(id), "Arts & Crafts");
    }

    #[test]
    fn test_custom_bank_size() {
        let bank = QuestionBank::new().with_bank_size(5);
        assert_eq!(bank.bank_size(), 5);
    }
}
