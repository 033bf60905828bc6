use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_assistant::plan::{PlanSource, TemplatePlans, acceptance_text, plan_for, template};

#[test]
fn stress_plan_matches_template() {
    let plan = TemplatePlans.generate(CategoryId::Stress, &[]);
    assert_eq!(plan.issue_name, "Stress Management");
    assert_eq!(plan.duration_label, "6 weeks");
    assert_eq!(plan.recommendations.len(), 3);
    let ranks: Vec<u8> = plan.recommendations.iter().map(|r| r.priority_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn plans_ignore_answers() {
    let a = TemplatePlans.generate(CategoryId::Depression, &[Answer::Scale(1)]);
    let b = TemplatePlans.generate(CategoryId::Depression, &[Answer::text("different")]);
    assert_eq!(a, b);
    assert_eq!(a.duration_label, "12 weeks");
}

#[test]
fn unrecognized_categories_get_the_anxiety_plan() {
    let anxiety = plan_for("anxiety");
    assert_eq!(anxiety.issue_name, "Anxiety Disorders");
    assert_eq!(plan_for("burnout"), anxiety);
    assert_eq!(plan_for(""), anxiety);
    assert_eq!(plan_for("trauma"), anxiety);
    assert_eq!(template(CategoryId::Eating), template(CategoryId::Anxiety));
}

#[test]
fn acceptance_text_names_the_issue() {
    let text = acceptance_text(template(CategoryId::Stress));
    assert!(text.starts_with("Perfect! I've created your personalized Stress Management therapy plan."));
}
