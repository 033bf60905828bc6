use std::sync::LazyLock;

use mindcare_core::models::category::CategoryId;

use crate::QuestionSet;
use crate::question::Question;

/// Depression assessment. Mood over the past two weeks, symptom checklist,
/// duration, lost interests, energy, sleep and thought patterns.
pub struct Depression;

impl QuestionSet for Depression {
    fn category(&self) -> CategoryId {
        CategoryId::Depression
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::text(
                    1,
                    "How would you describe your mood over the past two weeks?",
                    "mood",
                ),
                Question::scale(
                    2,
                    "On a scale of 1-10, how would you rate your overall mood lately?",
                    "severity",
                ),
                Question::multiple_choice(
                    3,
                    "Which symptoms have you been experiencing?",
                    &[
                        "Persistent sadness",
                        "Loss of interest",
                        "Fatigue",
                        "Sleep changes",
                        "Appetite changes",
                        "Difficulty concentrating",
                        "Feelings of worthlessness",
                    ],
                    "symptoms",
                ),
                Question::multiple_choice(
                    4,
                    "How long have you been feeling this way?",
                    &[
                        "Less than 2 weeks",
                        "2-4 weeks",
                        "1-3 months",
                        "3-6 months",
                        "More than 6 months",
                    ],
                    "duration",
                ),
                Question::text(
                    5,
                    "What activities did you used to enjoy that you've lost interest in?",
                    "interests",
                ),
                Question::text(
                    6,
                    "How are your energy levels throughout the day?",
                    "energy",
                ),
                Question::text(
                    7,
                    "How is your sleep pattern? Any changes recently?",
                    "sleep",
                ),
                Question::text(
                    8,
                    "What thoughts go through your mind when you're feeling low?",
                    "thoughts",
                ),
                Question::text(
                    9,
                    "What would help you feel more hopeful or motivated?",
                    "motivation",
                ),
                Question::text(
                    10,
                    "Is there anything else about your mood that you'd like to discuss?",
                    "additional",
                ),
            ]
        });
        &QUESTIONS
    }
}
