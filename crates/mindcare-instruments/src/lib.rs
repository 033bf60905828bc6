//! mindcare-instruments
//!
//! Category catalog and assessment question banks. Pure data — no I/O.
//! Defines the questions asked for each assessable category and the rules
//! an answer must satisfy before the assessment may advance.

pub mod catalog;
pub mod error;
pub mod question;
pub mod question_sets;

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;

use error::InstrumentError;
use question::Question;

/// Trait implemented by each category's question bank.
pub trait QuestionSet: Send + Sync {
    /// The category this bank assesses.
    fn category(&self) -> CategoryId;

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    fn len(&self) -> usize {
        self.questions().len()
    }

    fn is_empty(&self) -> bool {
        self.questions().is_empty()
    }

    fn question(&self, index: usize) -> Option<&Question> {
        self.questions().get(index)
    }

    /// Check `answer` against the question at `index`.
    fn validate_answer(&self, index: usize, answer: &Answer) -> Result<(), InstrumentError> {
        let question = self
            .question(index)
            .ok_or(InstrumentError::QuestionOutOfRange {
                category: self.category(),
                index,
                len: self.len(),
            })?;
        question.validate(answer)?;
        Ok(())
    }
}

/// Return every registered question bank.
pub fn all_question_sets() -> Vec<Box<dyn QuestionSet>> {
    vec![
        Box::new(question_sets::anxiety::Anxiety),
        Box::new(question_sets::depression::Depression),
        Box::new(question_sets::stress::Stress),
    ]
}

/// Look up the question bank for a category.
pub fn get_question_set(category: CategoryId) -> Option<Box<dyn QuestionSet>> {
    all_question_sets()
        .into_iter()
        .find(|s| s.category() == category)
}

/// Like [`get_question_set`], but an error for categories without a bank.
pub fn require_question_set(category: CategoryId) -> Result<Box<dyn QuestionSet>, InstrumentError> {
    get_question_set(category).ok_or(InstrumentError::NoQuestionSet(category))
}
