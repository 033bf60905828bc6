//! Therapy plan templates.
//!
//! Plans are selected by category alone. The collected answers are handed
//! to the [`PlanSource`] and persisted with the plan, but the built-in
//! templates do not vary with them. Categories without a template get the
//! anxiety plan.

use std::sync::LazyLock;

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_core::models::plan::{Recommendation, TherapyPlan};

/// Produces the plan shown at the end of an assessment.
pub trait PlanSource: Send {
    fn generate(&self, category: CategoryId, answers: &[Answer]) -> TherapyPlan;
}

/// The built-in static templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplatePlans;

impl PlanSource for TemplatePlans {
    fn generate(&self, category: CategoryId, _answers: &[Answer]) -> TherapyPlan {
        template(category).clone()
    }
}

static ANXIETY: LazyLock<TherapyPlan> = LazyLock::new(|| TherapyPlan {
    issue_name: "Anxiety Disorders".to_string(),
    severity_label: "Moderate".to_string(),
    duration_label: "8 weeks".to_string(),
    recommendations: vec![
        rec(
            "mindfulness",
            "Mindfulness & Breathing",
            "Learn breathing techniques to manage anxiety in the moment",
            1,
            "from-blue-500 to-cyan-500",
        ),
        rec(
            "cbt",
            "CBT Thought Records",
            "Challenge anxious thoughts with evidence-based techniques",
            2,
            "from-purple-500 to-pink-500",
        ),
        rec(
            "exposure",
            "Gradual Exposure",
            "Gradually face fears in a safe, controlled way",
            3,
            "from-orange-500 to-red-500",
        ),
    ],
    daily_goals: strings(&[
        "Practice 10 minutes of mindful breathing",
        "Complete one thought record",
        "Track anxiety levels in mood tracker",
    ]),
    weekly_goals: strings(&[
        "Complete 2-3 mindfulness sessions",
        "Practice one exposure exercise",
        "Schedule therapy session if needed",
    ]),
    resources: strings(&[
        "Anxiety and Phobia Workbook",
        "Mindfulness apps for daily practice",
        "Emergency coping strategies card",
    ]),
});

static DEPRESSION: LazyLock<TherapyPlan> = LazyLock::new(|| TherapyPlan {
    issue_name: "Depression".to_string(),
    severity_label: "Moderate".to_string(),
    duration_label: "12 weeks".to_string(),
    recommendations: vec![
        rec(
            "cbt",
            "CBT for Depression",
            "Address negative thought patterns and behaviors",
            1,
            "from-purple-500 to-pink-500",
        ),
        rec(
            "gratitude",
            "Gratitude Practice",
            "Build positive thinking patterns through daily gratitude",
            2,
            "from-green-500 to-teal-500",
        ),
        rec(
            "video",
            "Video Therapy",
            "Professional guidance for depression management",
            3,
            "from-blue-500 to-indigo-500",
        ),
    ],
    daily_goals: strings(&[
        "Write 3 things you're grateful for",
        "Complete one CBT thought record",
        "Engage in one pleasant activity",
    ]),
    weekly_goals: strings(&[
        "Watch 1-2 therapy videos",
        "Complete mood tracking daily",
        "Connect with support system",
    ]),
    resources: strings(&[
        "Depression self-help workbook",
        "Mood tracking journal",
        "Crisis support hotline numbers",
    ]),
});

static STRESS: LazyLock<TherapyPlan> = LazyLock::new(|| TherapyPlan {
    issue_name: "Stress Management".to_string(),
    severity_label: "Moderate".to_string(),
    duration_label: "6 weeks".to_string(),
    recommendations: vec![
        rec(
            "stress",
            "Stress Management Techniques",
            "Learn effective coping strategies for daily stress",
            1,
            "from-red-500 to-pink-500",
        ),
        rec(
            "mindfulness",
            "Mindfulness Practice",
            "Develop present-moment awareness to reduce stress",
            2,
            "from-blue-500 to-cyan-500",
        ),
        rec(
            "music",
            "Relaxation Audio",
            "Use therapeutic music for stress relief",
            3,
            "from-purple-500 to-blue-500",
        ),
    ],
    daily_goals: strings(&[
        "Practice 15 minutes of relaxation",
        "Identify and log stress triggers",
        "Use one coping strategy when stressed",
    ]),
    weekly_goals: strings(&[
        "Complete stress management exercises",
        "Establish regular relaxation routine",
        "Review and adjust coping strategies",
    ]),
    resources: strings(&[
        "Stress management workbook",
        "Relaxation audio library",
        "Quick stress relief techniques card",
    ]),
});

/// The template for `category`, falling back to the anxiety plan.
pub fn template(category: CategoryId) -> &'static TherapyPlan {
    match category {
        CategoryId::Depression => &*DEPRESSION,
        CategoryId::Stress => &*STRESS,
        _ => &*ANXIETY,
    }
}

/// Plan for a raw category identifier. Unknown identifiers resolve to the
/// anxiety plan rather than failing.
pub fn plan_for(category_id: &str) -> TherapyPlan {
    match category_id.parse::<CategoryId>() {
        Ok(category) => template(category).clone(),
        Err(_) => {
            tracing::debug!(category_id, "unknown category, using default plan");
            ANXIETY.clone()
        }
    }
}

/// Text of the transcript message appended when a plan is accepted.
pub fn acceptance_text(plan: &TherapyPlan) -> String {
    format!(
        "Perfect! I've created your personalized {} therapy plan. You can access your recommended therapies anytime from the Therapy Modules section. Remember, I'm here whenever you need support or have questions about your journey.",
        plan.issue_name
    )
}

fn rec(
    module_id: &str,
    title: &str,
    description: &str,
    priority_rank: u8,
    color: &str,
) -> Recommendation {
    Recommendation {
        module_id: module_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority_rank,
        color: color.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
