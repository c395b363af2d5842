//! Turning a configuration into the ordered question list for one session.
//!
//! Built-in mode splits the total evenly across the selected categories
//! (the first `total mod n` categories get one extra), samples each quota
//! without replacement, then shuffles the combined list. Custom mode
//! truncates the authored list and shuffles it.

use tracing::{debug, warn};

use super::bank::QuestionSource;
use super::question::{CategoryId, Question};
use crate::core::config::{QuizConfig, SourceMode};
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// Even split of `total` over `category_count` categories.
///
/// ```
/// use classroom_quiz::questions::category_quotas;
///
/// assert_eq!(category_quotas(30, 2), vec![15, 15]);
/// assert_eq!(category_quotas(31, 2), vec![16, 15]);
/// assert_eq!(category_quotas(10, 4), vec![3, 3, 2, 2]);
/// ```
#[must_use]
pub fn category_quotas(total: usize, category_count: usize) -> Vec<usize> {
    if category_count == 0 {
        return Vec::new();
    }
    let base = total / category_count;
    let extra = total % category_count;
    (0..category_count)
        .map(|i| base + usize::from(i < extra))
        .collect()
}

/// Sample each category's quota from the source.
///
/// The total is capped at `categories × bank_size`. A category holding fewer
/// questions than its quota contributes all it has. Categories the source
/// does not know are rejected.
pub fn draw_builtin<S>(
    source: &S,
    categories: &[CategoryId],
    total: usize,
    rng: &mut GameRng,
) -> Result<Vec<Question>, ConfigError>
where
    S: QuestionSource + ?Sized,
{
    if let Some(&unknown) = categories.iter().find(|&&c| !source.has_category(c)) {
        return Err(ConfigError::UnknownCategory(unknown));
    }

    let max = categories.len() * source.bank_size();
    let capped = total.min(max);
    if capped < total {
        warn!(requested = total, max, "question total exceeds bank, capping");
    }

    let mut sampler = rng.for_context("quota");
    let mut drawn = Vec::with_capacity(capped);
    for (&category, quota) in categories.iter().zip(category_quotas(capped, categories.len())) {
        let available = source.questions(category);
        if available.len() < quota {
            warn!(%category, quota, available = available.len(), "category holds fewer questions than its quota");
        }
        let picked = sampler.sample(available, quota);
        debug!(%category, quota, drawn = picked.len(), "sampled category");
        drawn.extend(picked);
    }
    Ok(drawn)
}

/// The first `total` authored questions.
#[must_use]
pub fn draw_custom(questions: &[Question], total: usize) -> Vec<Question> {
    questions.iter().take(total).cloned().collect()
}

/// Source and order the questions for a session.
///
/// Fails with `NoQuestions` when nothing was drawn.
pub fn select_questions<S>(
    config: &QuizConfig,
    source: &S,
    rng: &mut GameRng,
) -> Result<Vec<Question>, ConfigError>
where
    S: QuestionSource + ?Sized,
{
    let mut questions = match config.source {
        SourceMode::BuiltIn => draw_builtin(source, &config.categories, config.total_questions, rng)?,
        SourceMode::Custom => draw_custom(config.custom_questions.as_slice(), config.total_questions),
    };

    if questions.is_empty() {
        return Err(ConfigError::NoQuestions);
    }

    rng.shuffle(&mut questions);
    Ok(questions)
}
