//! Question sourcing through the public configuration surface.

use classroom_quiz::core::{ConfigError, GameRng, SourceMode};
use classroom_quiz::questions::builtin::{GENERAL_KNOWLEDGE, HISTORY, MATHEMATICS, SCIENCE};
use classroom_quiz::questions::{draw_builtin, select_questions, QuestionSource};
use classroom_quiz::{
    CategoryId, CustomQuestionDraft, CustomQuestions, Question, QuestionBank, QuizConfig, QuizError,
    Session, Text,
};

fn count_in(questions: &[Question], category: CategoryId) -> usize {
    questions.iter().filter(|q| q.category == Some(category)).count()
}

/// A bank with `size` questions in each of science and mathematics.
fn deep_bank(size: usize) -> QuestionBank {
    let mut bank = QuestionBank::new().with_bank_size(size);
    for (id, key) in [(SCIENCE, "science"), (MATHEMATICS, "mathematics")] {
        bank.register_category(id, key, key);
        for n in 0..size {
            bank.add_question(id, Question::new(format!("{key}_{n}"), "prompt", "answer"));
        }
    }
    bank
}

#[test]
fn test_two_categories_default_split() {
    let config = QuizConfig::new().with_categories([SCIENCE, MATHEMATICS]);
    assert_eq!(config.total_questions, 30);
    assert_eq!(config.category_quotas(), vec![(SCIENCE, 15), (MATHEMATICS, 15)]);

    let questions = select_questions(&config, &QuestionBank::builtin(), &mut GameRng::new(1)).unwrap();
    assert_eq!(questions.len(), 30);
    assert_eq!(count_in(&questions, SCIENCE), 15);
    assert_eq!(count_in(&questions, MATHEMATICS), 15);
}

#[test]
fn test_odd_total_gives_first_category_the_extra() {
    let mut config = QuizConfig::new().with_categories([SCIENCE, MATHEMATICS]);
    config.total_questions = 31;
    assert_eq!(config.category_quotas(), vec![(SCIENCE, 16), (MATHEMATICS, 15)]);

    let questions = select_questions(&config, &deep_bank(20), &mut GameRng::new(2)).unwrap();
    assert_eq!(count_in(&questions, SCIENCE), 16);
    assert_eq!(count_in(&questions, MATHEMATICS), 15);
}

#[test]
fn test_commit_clamps_to_builtin_bank() {
    let mut config = QuizConfig::new().with_categories([SCIENCE, MATHEMATICS]);

    config.commit_total_questions(Some(31));
    assert_eq!(config.total_questions, 30);

    config.commit_total_questions(None);
    assert_eq!(config.total_questions, 2);

    config.commit_total_questions(Some(0));
    assert_eq!(config.total_questions, 2);

    config.commit_total_questions(Some(7));
    assert_eq!(config.category_quotas(), vec![(SCIENCE, 4), (MATHEMATICS, 3)]);
}

#[test]
fn test_draw_never_exceeds_bank() {
    let bank = QuestionBank::builtin();
    let questions = draw_builtin(&bank, &[HISTORY], 40, &mut GameRng::new(3)).unwrap();
    assert_eq!(questions.len(), 15);

    let mut ids: Vec<_> = questions.iter().map(|q| q.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 15);
}

#[test]
fn test_all_four_categories() {
    let bank = QuestionBank::builtin();
    let config = QuizConfig::new()
        .with_categories([SCIENCE, MATHEMATICS, GENERAL_KNOWLEDGE, HISTORY])
        .with_total_questions(10);

    let questions = select_questions(&config, &bank, &mut GameRng::new(4)).unwrap();
    assert_eq!(count_in(&questions, SCIENCE), 3);
    assert_eq!(count_in(&questions, MATHEMATICS), 3);
    assert_eq!(count_in(&questions, GENERAL_KNOWLEDGE), 2);
    assert_eq!(count_in(&questions, HISTORY), 2);
}

#[test]
fn test_builtin_text_resolves_with_fallback() {
    let bank = QuestionBank::builtin();
    let first = &bank.questions(SCIENCE)[0];

    assert_eq!(first.prompt, Text::key("question_sci_1", "Question not available"));
    assert_eq!(first.prompt.resolve(|_| None), "Question not available");
    assert_eq!(
        first.answer.resolve(|key| (key == "answer_sci_1").then(|| "Oxygen".to_string())),
        "Oxygen"
    );
}

#[test]
fn test_no_categories_fails_start() {
    let err = Session::configure(QuizConfig::new().with_categories([]), &QuestionBank::builtin())
        .unwrap_err();
    assert_eq!(err, ConfigError::NoQuestions);
}

#[test]
fn test_unknown_category_fails_start() {
    let mut session = Session::new(QuizConfig::new().with_categories([CategoryId::new(99)])).unwrap();
    let err = session.start(&QuestionBank::builtin()).unwrap_err();
    assert!(matches!(err, QuizError::Config(ConfigError::UnknownCategory(c)) if c == CategoryId::new(99)));
}

#[test]
fn test_custom_mode_truncates_and_uses_authored_points() {
    let mut list = CustomQuestions::new();
    for i in 0..25 {
        list.add(&CustomQuestionDraft::new(format!("q{i}"), format!("a{i}")).with_points(i % 50 + 1))
            .unwrap();
    }
    let config = QuizConfig::new().with_custom_questions(list);
    assert_eq!(config.source, SourceMode::Custom);
    assert_eq!(config.total_questions, 20);
    assert_eq!(config.max_total_questions(), None);

    let questions = select_questions(&config, &QuestionBank::new(), &mut GameRng::new(5)).unwrap();
    assert_eq!(questions.len(), 20);
    for q in &questions {
        let n: u32 = q.id.as_str().trim_start_matches("custom_").parse().unwrap();
        assert!(n <= 20, "{} is past the truncation point", q.id);
        assert!(q.category.is_none());
    }
}

#[test]
fn test_custom_mode_without_questions() {
    let config = QuizConfig::new().with_custom_questions(CustomQuestions::new());
    assert_eq!(config.total_questions, 0);

    let err = Session::configure(config, &QuestionBank::new()).unwrap_err();
    assert_eq!(err, ConfigError::NoQuestions);
}

#[test]
fn test_same_seed_same_order() {
    let bank = QuestionBank::builtin();
    let config = QuizConfig::new().with_seed(1234);

    let a = select_questions(&config, &bank, &mut GameRng::new(config.seed)).unwrap();
    let b = select_questions(&config, &bank, &mut GameRng::new(config.seed)).unwrap();
    let c = select_questions(&config, &bank, &mut GameRng::new(4321)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}
