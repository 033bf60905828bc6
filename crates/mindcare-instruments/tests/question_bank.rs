use std::collections::HashSet;

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_instruments::catalog::{all_categories, category, is_assessable, suggestion_categories};
use mindcare_instruments::error::InstrumentError;
use mindcare_instruments::question::{AnswerError, Question, QuestionKind};
use mindcare_instruments::{all_question_sets, get_question_set, require_question_set};

#[test]
fn every_question_set_is_non_empty_with_unique_ids() {
    for set in all_question_sets() {
        assert!(!set.is_empty(), "{} has no questions", set.category());
        let ids: HashSet<u32> = set.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), set.len(), "{} has duplicate ids", set.category());
    }
}

#[test]
fn banked_categories_have_ten_questions() {
    for id in [CategoryId::Anxiety, CategoryId::Depression, CategoryId::Stress] {
        assert_eq!(get_question_set(id).unwrap().len(), 10);
    }
}

#[test]
fn question_order_is_presentation_order() {
    let set = get_question_set(CategoryId::Stress).unwrap();
    let ids: Vec<u32> = set.questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(set.question(1).unwrap().kind, QuestionKind::Scale);
    assert_eq!(set.question(2).unwrap().kind, QuestionKind::MultipleChoice);
}

#[test]
fn categories_without_bank_are_not_assessable() {
    assert!(is_assessable(CategoryId::Anxiety));
    assert!(!is_assessable(CategoryId::Trauma));
    assert!(matches!(
        require_question_set(CategoryId::Sleep),
        Err(InstrumentError::NoQuestionSet(CategoryId::Sleep))
    ));
}

#[test]
fn catalog_lists_eight_categories_in_order() {
    let catalog = all_categories();
    assert_eq!(catalog.len(), 8);
    let ids: Vec<CategoryId> = catalog.iter().map(|c| c.id).collect();
    assert_eq!(ids, CategoryId::ALL.to_vec());
    assert_eq!(category(CategoryId::Trauma).display_name, "Trauma & PTSD");
    assert_eq!(category(CategoryId::Eating).display_name, "Eating Disorders");
}

#[test]
fn suggestions_take_the_first_categories() {
    assert_eq!(
        suggestion_categories(4),
        vec![
            CategoryId::Anxiety,
            CategoryId::Depression,
            CategoryId::Stress,
            CategoryId::Trauma,
        ]
    );
    assert_eq!(suggestion_categories(20).len(), 8);
}

#[test]
fn text_answers_must_not_be_blank() {
    let q = Question::text(1, "How are you?", "mood");
    assert!(q.accepts(&Answer::text("fine")));
    assert_eq!(
        q.validate(&Answer::text("   \n")),
        Err(AnswerError::EmptyText { question_id: 1 })
    );
}

#[test]
fn scale_answers_must_be_one_to_ten() {
    let q = Question::scale(2, "Rate it", "severity");
    assert!(q.accepts(&Answer::Scale(1)));
    assert!(q.accepts(&Answer::Scale(10)));
    assert!(!q.accepts(&Answer::Scale(0)));
    assert!(!q.accepts(&Answer::Scale(11)));
}

#[test]
fn choice_answers_must_be_listed() {
    let set = get_question_set(CategoryId::Anxiety).unwrap();
    assert!(set.validate_answer(3, &Answer::choice("Daily")).is_ok());
    let err = set.validate_answer(3, &Answer::choice("Hourly")).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::Answer(AnswerError::UnknownOption { question_id: 4, .. })
    ));
}

#[test]
fn boolean_questions_offer_yes_no() {
    let q = Question::boolean(11, "Have you seen a therapist before?", "history");
    assert_eq!(q.options, vec!["Yes".to_string(), "No".to_string()]);
    assert!(q.accepts(&Answer::YesNo(false)));
    assert!(!q.accepts(&Answer::choice("Yes")));
}

#[test]
fn mismatched_answer_kind_is_rejected() {
    let q = Question::scale(2, "Rate it", "severity");
    assert_eq!(
        q.validate(&Answer::text("7")),
        Err(AnswerError::KindMismatch {
            question_id: 2,
            expected: QuestionKind::Scale
        })
    );
}

#[test]
fn out_of_range_index_is_an_error() {
    let set = get_question_set(CategoryId::Depression).unwrap();
    assert!(matches!(
        set.validate_answer(10, &Answer::text("x")),
        Err(InstrumentError::QuestionOutOfRange { index: 10, len: 10, .. })
    ));
}
