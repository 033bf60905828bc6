use std::sync::LazyLock;

use mindcare_core::models::category::CategoryId;

use crate::QuestionSet;
use crate::question::Question;

/// Anxiety assessment: triggers, severity, physical symptoms, frequency,
/// coping history, impact, support and goals.
pub struct Anxiety;

impl QuestionSet for Anxiety {
    fn category(&self) -> CategoryId {
        CategoryId::Anxiety
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::text(
                    1,
                    "Can you describe a recent situation where you felt anxious? What was happening around you and what thoughts went through your mind?",
                    "triggers",
                ),
                Question::scale(
                    2,
                    "On a scale of 1-10, how would you rate your average anxiety level over the past week?",
                    "severity",
                ),
                Question::multiple_choice(
                    3,
                    "Which physical symptoms do you experience when anxious?",
                    &[
                        "Racing heart",
                        "Sweating",
                        "Trembling",
                        "Shortness of breath",
                        "Nausea",
                        "Dizziness",
                        "Muscle tension",
                    ],
                    "symptoms",
                ),
                Question::multiple_choice(
                    4,
                    "How often do you experience anxiety symptoms?",
                    &["Daily", "Several times a week", "Weekly", "Monthly", "Rarely"],
                    "frequency",
                ),
                Question::text(
                    5,
                    "What situations or thoughts typically trigger your anxiety?",
                    "triggers",
                ),
                Question::text(
                    6,
                    "Have you tried any coping strategies before? If so, what worked or didn't work?",
                    "coping",
                ),
                Question::text(
                    7,
                    "How is your anxiety affecting your daily life (work, relationships, activities)?",
                    "impact",
                ),
                Question::text(
                    8,
                    "Do you have any support systems (family, friends, professionals)?",
                    "support",
                ),
                Question::text(
                    9,
                    "What are your main goals for managing your anxiety?",
                    "goals",
                ),
                Question::text(
                    10,
                    "Is there anything else about your anxiety that you'd like to share?",
                    "additional",
                ),
            ]
        });
        &QUESTIONS
    }
}
