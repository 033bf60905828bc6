use mindcare_core::models::category::CategoryId;
use thiserror::Error;

use crate::question::AnswerError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("no assessment available for category: {0}")]
    NoQuestionSet(CategoryId),

    #[error("answer rejected: {0}")]
    Answer(#[from] AnswerError),

    #[error("question {index} out of range for '{category}' ({len} questions)")]
    QuestionOutOfRange {
        category: CategoryId,
        index: usize,
        len: usize,
    },
}
