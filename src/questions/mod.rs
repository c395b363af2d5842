//! Question records, sources, authoring, and selection.
//!
//! ## Key Types
//!
//! - `Question`: id, prompt/answer `Text`, points, category and difficulty tags
//! - `Text`: literal string or lookup key with fallback (resolved by the host)
//! - `QuestionSource`: provider seam; `QuestionBank` is the in-memory bank
//! - `CustomQuestions`: teacher-authored list with validation
//!
//! `select_questions` turns a `QuizConfig` into a session's question order.

pub mod bank;
pub mod custom;
pub mod question;
pub mod selection;

pub use bank::{builtin, CategoryInfo, QuestionBank, QuestionSource};
pub use custom::{CustomQuestionDraft, CustomQuestions};
pub use question::{CategoryId, Difficulty, Question, QuestionId, Text};
pub use selection::{category_quotas, draw_builtin, draw_custom, select_questions};
