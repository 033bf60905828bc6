//! The assessment state machine.
//!
//! ```text
//! Idle ──start(c)──▶ InProgress(c, 0) ──answer──▶ InProgress(c, i+1)
//!                        │   ▲  │                      │
//!                        │   └──┘ back / forward       │ answer on last index
//!                        │                             ▼
//!                        └──cancel──▶ Cancelled     Completed(c, answers)
//! ```
//!
//! Navigation never discards answers. Answering at index `i` replaces the
//! answer already recorded there, otherwise appends, so
//! `current_index <= answers.len() <= questions.len()` always holds.

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_instruments::question::Question;
use mindcare_instruments::{QuestionSet, catalog, require_question_set};
use serde::Serialize;
use ts_rs::TS;

use crate::error::AssistantError;

/// A running assessment for one category.
pub struct AssessmentSession {
    questions: Box<dyn QuestionSet>,
    current_index: usize,
    answers: Vec<Answer>,
}

impl AssessmentSession {
    fn new(questions: Box<dyn QuestionSet>) -> Self {
        Self {
            questions,
            current_index: 0,
            answers: Vec::new(),
        }
    }

    pub fn category(&self) -> CategoryId {
        self.questions.category()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.question(self.current_index)
    }

    /// The answer already recorded for the displayed question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(self.current_index)
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total()
    }

    fn progress(&self) -> Option<AssessmentProgress> {
        let question = self.current_question()?.clone();
        let total = self.total();
        Some(AssessmentProgress {
            category: self.category(),
            category_name: catalog::category(self.category()).display_name.clone(),
            question_number: self.current_index + 1,
            total,
            answered: self.answers.len(),
            fraction: (self.current_index + 1) as f32 / total as f32,
            question,
            current_answer: self.current_answer().cloned(),
        })
    }
}

/// What the presentation layer needs to render the assessment dialog.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AssessmentProgress {
    pub category: CategoryId,
    pub category_name: String,
    /// 1-based, for "Question i of n".
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    /// Progress bar fill, `question_number / total`.
    pub fraction: f32,
    pub question: Question,
    pub current_answer: Option<Answer>,
}

/// A finished assessment, ready for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedAssessment {
    pub category: CategoryId,
    pub answers: Vec<Answer>,
}

pub enum AssessmentState {
    Idle,
    InProgress(AssessmentSession),
    Completed(CompletedAssessment),
    Cancelled,
}

/// Result of a successful [`Assessment::answer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// The last question was answered.
    Completed(CompletedAssessment),
}

pub struct Assessment {
    state: AssessmentState,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    pub fn new() -> Self {
        Self {
            state: AssessmentState::Idle,
        }
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn session(&self) -> Option<&AssessmentSession> {
        match &self.state {
            AssessmentState::InProgress(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.session().is_some()
    }

    pub fn progress(&self) -> Option<AssessmentProgress> {
        self.session().and_then(AssessmentSession::progress)
    }

    /// Begin a fresh session for `category`, discarding any running one.
    ///
    /// Fails without changing state if the category has no question bank.
    pub fn start(&mut self, category: CategoryId) -> Result<(), AssistantError> {
        let questions = require_question_set(category)?;
        if questions.is_empty() {
            return Err(AssistantError::NoQuestions(category));
        }
        self.state = AssessmentState::InProgress(AssessmentSession::new(questions));
        Ok(())
    }

    /// Record `answer` for the displayed question and move forward.
    ///
    /// An answer the question does not accept leaves the session untouched.
    pub fn answer(&mut self, answer: Answer) -> Result<Step, AssistantError> {
        let AssessmentState::InProgress(session) = &mut self.state else {
            return Err(AssistantError::NoActiveAssessment);
        };

        let index = session.current_index;
        session.questions.validate_answer(index, &answer)?;

        if index < session.answers.len() {
            session.answers[index] = answer;
        } else {
            session.answers.push(answer);
        }

        if index + 1 < session.total() {
            session.current_index = index + 1;
            return Ok(Step::Advanced {
                index: session.current_index,
            });
        }

        let completed = CompletedAssessment {
            category: session.category(),
            answers: std::mem::take(&mut session.answers),
        };
        self.state = AssessmentState::Completed(completed.clone());
        Ok(Step::Completed(completed))
    }

    /// Show the previous question. Returns whether the index moved.
    pub fn back(&mut self) -> bool {
        match &mut self.state {
            AssessmentState::InProgress(session) if session.current_index > 0 => {
                session.current_index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Show the next question, but only over one that is already answered.
    pub fn forward(&mut self) -> bool {
        match &mut self.state {
            AssessmentState::InProgress(session)
                if session.current_index < session.answers.len() && !session.is_last() =>
            {
                session.current_index += 1;
                true
            }
            _ => false,
        }
    }

    /// Abandon the running session. No plan is generated.
    pub fn cancel(&mut self) -> bool {
        if self.is_in_progress() {
            self.state = AssessmentState::Cancelled;
            true
        } else {
            false
        }
    }
}
