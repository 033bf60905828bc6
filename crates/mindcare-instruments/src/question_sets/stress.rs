use std::sync::LazyLock;

use mindcare_core::models::category::CategoryId;

use crate::QuestionSet;
use crate::question::Question;

pub struct Stress;

impl QuestionSet for Stress {
    fn category(&self) -> CategoryId {
        CategoryId::Stress
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::text(
                    1,
                    "What are the main sources of stress in your life right now?",
                    "sources",
                ),
                Question::scale(
                    2,
                    "On a scale of 1-10, how stressed do you feel on average?",
                    "severity",
                ),
                Question::multiple_choice(
                    3,
                    "How does stress typically show up in your body?",
                    &[
                        "Headaches",
                        "Muscle tension",
                        "Stomach issues",
                        "Sleep problems",
                        "Fatigue",
                        "Irritability",
                        "Racing thoughts",
                    ],
                    "symptoms",
                ),
                Question::multiple_choice(
                    4,
                    "When do you feel most stressed during the day?",
                    &["Morning", "Afternoon", "Evening", "Night", "Varies", "All day"],
                    "timing",
                ),
                Question::text(5, "How do you currently cope with stress?", "coping"),
                Question::text(
                    6,
                    "What relaxation techniques have you tried before?",
                    "techniques",
                ),
                Question::text(
                    7,
                    "How is stress affecting your work or daily activities?",
                    "impact",
                ),
                Question::text(
                    8,
                    "What would your ideal stress-free day look like?",
                    "goals",
                ),
                Question::text(
                    9,
                    "What support do you have for managing stress?",
                    "support",
                ),
                Question::text(
                    10,
                    "What's one thing that always helps you feel calmer?",
                    "relief",
                ),
            ]
        });
        &QUESTIONS
    }
}
