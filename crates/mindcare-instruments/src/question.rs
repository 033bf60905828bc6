use std::ops::RangeInclusive;

use mindcare_core::models::answer::Answer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Values accepted by a scale question.
pub const SCALE: RangeInclusive<u8> = 1..=10;

/// Labels rendered for a yes/no question.
pub const YES_NO_OPTIONS: [&str; 2] = ["Yes", "No"];

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Free text; must be non-blank.
    Text,
    /// One integer from [`SCALE`].
    Scale,
    /// Exactly one of the listed options.
    MultipleChoice,
    /// Yes or No, rendered like a two-option multiple choice.
    Boolean,
}

/// A single assessment question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within its question bank.
    pub id: u32,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Listed options for multiple-choice and boolean questions.
    pub options: Vec<String>,
    /// What aspect the question probes (e.g. `"triggers"`, `"severity"`).
    pub tag: String,
}

impl Question {
    pub fn text(id: u32, prompt: &str, tag: &str) -> Self {
        Self::build(id, prompt, QuestionKind::Text, Vec::new(), tag)
    }

    pub fn scale(id: u32, prompt: &str, tag: &str) -> Self {
        Self::build(id, prompt, QuestionKind::Scale, Vec::new(), tag)
    }

    pub fn multiple_choice(id: u32, prompt: &str, options: &[&str], tag: &str) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::build(id, prompt, QuestionKind::MultipleChoice, options, tag)
    }

    pub fn boolean(id: u32, prompt: &str, tag: &str) -> Self {
        let options = YES_NO_OPTIONS.iter().map(|o| o.to_string()).collect();
        Self::build(id, prompt, QuestionKind::Boolean, options, tag)
    }

    fn build(id: u32, prompt: &str, kind: QuestionKind, options: Vec<String>, tag: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            kind,
            options,
            tag: tag.to_string(),
        }
    }

    /// Check that `answer` is acceptable for this question.
    pub fn validate(&self, answer: &Answer) -> Result<(), AnswerError> {
        match (self.kind, answer) {
            (QuestionKind::Text, Answer::Text(text)) => {
                if text.trim().is_empty() {
                    Err(AnswerError::EmptyText { question_id: self.id })
                } else {
                    Ok(())
                }
            }
            (QuestionKind::Scale, Answer::Scale(value)) => {
                if SCALE.contains(value) {
                    Ok(())
                } else {
                    Err(AnswerError::ScaleOutOfRange {
                        question_id: self.id,
                        value: *value,
                    })
                }
            }
            (QuestionKind::MultipleChoice, Answer::Choice(option)) => {
                if self.options.iter().any(|o| o == option) {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        question_id: self.id,
                        option: option.clone(),
                    })
                }
            }
            (QuestionKind::Boolean, Answer::YesNo(_)) => Ok(()),
            (kind, _) => Err(AnswerError::KindMismatch {
                question_id: self.id,
                expected: kind,
            }),
        }
    }

    /// Whether the "advance" affordance should be enabled for `answer`.
    pub fn accepts(&self, answer: &Answer) -> bool {
        self.validate(answer).is_ok()
    }
}

/// Why an answer was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("question {question_id}: answer text is empty")]
    EmptyText { question_id: u32 },

    #[error("question {question_id}: scale value {value} is outside 1-10")]
    ScaleOutOfRange { question_id: u32, value: u8 },

    #[error("question {question_id}: '{option}' is not one of the listed options")]
    UnknownOption { question_id: u32, option: String },

    #[error("question {question_id}: expected a {expected:?} answer")]
    KindMismatch { question_id: u32, expected: QuestionKind },
}
