use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_core::models::message::{MessageKind, MessagePayload, Sender};
use mindcare_core::models::plan::TherapyPlan;
use mindcare_core::models::user::UserIdentity;
use mindcare_core::storage_keys::USER_PROGRESS;
use mindcare_instruments::get_question_set;
use mindcare_instruments::question::QuestionKind;
use mindcare_storage::error::StorageError;
use mindcare_storage::state::load_progress;
use mindcare_storage::{KeyValueStore, MemoryStore};
use mindcare_assistant::config::AssistantConfig;
use mindcare_assistant::plan::{PlanSource, TemplatePlans};
use mindcare_assistant::responder::{FALLBACK_REPLIES, FixedChooser};
use mindcare_assistant::{AnswerOutcome, Assistant, AssistantError};

struct CountingPlans {
    calls: Arc<AtomicUsize>,
}

impl PlanSource for CountingPlans {
    fn generate(&self, category: CategoryId, answers: &[Answer]) -> TherapyPlan {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TemplatePlans.generate(category, answers)
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::NotFound {
            key: key.to_string(),
        })
    }

    fn put(&self, _key: &str, _body: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

fn user() -> UserIdentity {
    UserIdentity::new("user-42", "Sam")
}

fn valid_answers(category: CategoryId) -> Vec<Answer> {
    get_question_set(category)
        .unwrap()
        .questions()
        .iter()
        .map(|q| match q.kind {
            QuestionKind::Text => Answer::text(format!("answer {}", q.id)),
            QuestionKind::Scale => Answer::Scale(6),
            QuestionKind::MultipleChoice => Answer::choice(q.options[1].clone()),
            QuestionKind::Boolean => Answer::YesNo(false),
        })
        .collect()
}

fn complete(assistant: &mut Assistant, category: CategoryId) -> TherapyPlan {
    assistant.start_assessment(category).unwrap();
    let mut plan = None;
    for answer in valid_answers(category) {
        if let AnswerOutcome::PlanReady(p) = assistant.answer(answer).unwrap() {
            plan = Some(p);
        }
    }
    plan.expect("assessment should complete")
}

#[test]
fn transcript_starts_with_personal_greeting() {
    let assistant = Assistant::new(Some(user()), MemoryStore::new());
    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].sender, Sender::Bot);
    assert!(transcript[0].text.starts_with("Hello Sam! I'm your AI mental health assistant."));

    let anonymous = Assistant::new(None, MemoryStore::new());
    assert!(anonymous.transcript()[0].text.starts_with("Hello! "));
}

#[test]
fn blank_messages_are_rejected() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    assert!(matches!(
        assistant.send("  \t "),
        Err(AssistantError::EmptyMessage)
    ));
    assert_eq!(assistant.transcript().len(), 1);
    assert!(!assistant.is_typing());
}

#[test]
fn send_appends_user_message_then_reply_on_delivery() {
    let mut assistant =
        Assistant::new(Some(user()), MemoryStore::new()).with_chooser(FixedChooser(3));

    let reply = assistant.send("hello there").unwrap();
    assert!(assistant.is_typing());
    assert_eq!(assistant.transcript().len(), 2);
    assert_eq!(assistant.transcript()[1].sender, Sender::User);
    assert_eq!(assistant.transcript()[1].text, "hello there");

    assert!(assistant.deliver(reply));
    assert!(!assistant.is_typing());
    assert_eq!(assistant.transcript().len(), 3);
    assert_eq!(assistant.transcript()[2].text, FALLBACK_REPLIES[3]);
}

#[test]
fn later_send_supersedes_pending_reply() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    let first = assistant.send("I'm anxious").unwrap();
    let second = assistant.send("and stressed").unwrap();

    assert!(!assistant.deliver(first));
    assert!(assistant.deliver(second));

    let bot_replies: Vec<_> = assistant
        .transcript()
        .iter()
        .skip(1)
        .filter(|m| m.sender == Sender::Bot)
        .collect();
    assert_eq!(bot_replies.len(), 1);
    assert!(matches!(
        bot_replies[0].payload,
        Some(MessagePayload::Suggestions { matched: CategoryId::Stress, .. })
    ));
}

#[test]
fn cancelled_reply_is_never_delivered() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    let reply = assistant.send("worried").unwrap();
    assistant.cancel_pending_reply();
    assert!(!assistant.is_typing());
    assert!(!assistant.deliver(reply));
    assert_eq!(assistant.transcript().len(), 2);
}

#[test]
fn completing_stress_assessment_yields_stress_plan() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    let progress = assistant.start_assessment(CategoryId::Stress).unwrap();
    assert_eq!(progress.total, 10);
    assert_eq!(progress.question_number, 1);

    let plan = complete(&mut assistant, CategoryId::Stress);
    assert_eq!(plan.issue_name, "Stress Management");
    assert_eq!(plan.duration_label, "6 weeks");
    assert_eq!(plan.recommendations.len(), 3);
    assert!(assistant.assessment_progress().is_none());
    assert_eq!(assistant.pending_plan().unwrap().plan, plan);
}

#[test]
fn plan_is_generated_exactly_once_per_completion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new()).with_plan_source(
        CountingPlans {
            calls: Arc::clone(&calls),
        },
    );

    assistant.start_assessment(CategoryId::Anxiety).unwrap();
    let answers = valid_answers(CategoryId::Anxiety);
    for answer in &answers[..9] {
        assistant.answer(answer.clone()).unwrap();
    }
    assistant.back();
    assistant.forward();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assistant.answer(answers[9].clone()).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // the session is over; further answers are rejected, not re-generated
    assert!(assistant.answer(Answer::text("more")).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn cancelled_assessment_produces_no_plan() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    assistant.start_assessment(CategoryId::Depression).unwrap();
    assistant.answer(Answer::text("grey")).unwrap();
    assert!(assistant.cancel_assessment());
    assert!(assistant.pending_plan().is_none());
    assert!(!assistant.cancel_assessment());
}

#[test]
fn start_by_unknown_id_fails() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    assert!(matches!(
        assistant.start_assessment_by_id("burnout"),
        Err(AssistantError::Core(_))
    ));
    assert!(assistant.start_assessment_by_id("sleep").is_err());
    assert!(assistant.start_assessment_by_id("stress").is_ok());
}

#[test]
fn accepting_plan_appends_one_message_and_overwrites_progress() {
    let store = Arc::new(MemoryStore::new());
    let mut assistant = Assistant::new(Some(user()), Arc::clone(&store));

    complete(&mut assistant, CategoryId::Depression);
    let before = assistant.transcript().len();
    let acceptance = assistant.accept_plan().unwrap();
    assert!(acceptance.is_saved());

    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), before + 1);
    let last = transcript.last().unwrap();
    assert_eq!(last.id, acceptance.message_id);
    assert_eq!(last.kind, MessageKind::Plan);
    assert!(matches!(
        &last.payload,
        Some(MessagePayload::Plan { plan }) if plan.issue_name == "Depression"
    ));

    let saved = load_progress(&*store, USER_PROGRESS).unwrap();
    assert_eq!(saved.user_id, "user-42");
    assert_eq!(saved.current_plan.issue_name, "Depression");
    assert_eq!(saved.assessment_answers, valid_answers(CategoryId::Depression));
    assert!(saved.completed_modules.is_empty());

    // a second plan replaces the first record wholesale
    complete(&mut assistant, CategoryId::Stress);
    assistant.accept_plan().unwrap();
    let saved = load_progress(&*store, USER_PROGRESS).unwrap();
    assert_eq!(saved.current_plan.issue_name, "Stress Management");
    assert_eq!(saved.assessment_answers, valid_answers(CategoryId::Stress));
    assert_eq!(store.len(), 1);
    assert_eq!(
        assistant.current_plan().unwrap().issue_name,
        "Stress Management"
    );
}

#[test]
fn accept_without_plan_is_an_error() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    assert!(matches!(
        assistant.accept_plan(),
        Err(AssistantError::NoPendingPlan)
    ));
}

#[test]
fn storage_failure_is_reported_but_plan_is_kept() {
    let mut assistant = Assistant::new(Some(user()), BrokenStore);
    complete(&mut assistant, CategoryId::Anxiety);

    let acceptance = assistant.accept_plan().unwrap();
    assert!(!acceptance.is_saved());
    assert!(matches!(
        acceptance.save_error,
        Some(StorageError::Unavailable(_))
    ));
    assert_eq!(acceptance.plan.issue_name, "Anxiety Disorders");
    assert_eq!(assistant.transcript().last().unwrap().kind, MessageKind::Plan);
}

#[test]
fn dismissed_plan_is_not_persisted() {
    let store = Arc::new(MemoryStore::new());
    let mut assistant = Assistant::new(Some(user()), Arc::clone(&store));
    complete(&mut assistant, CategoryId::Anxiety);
    let before = assistant.transcript().len();

    assert!(assistant.dismiss_plan());
    assert!(!assistant.dismiss_plan());
    assert_eq!(assistant.transcript().len(), before);
    assert!(store.is_empty());
}

#[test]
fn progress_key_comes_from_config() {
    let store = Arc::new(MemoryStore::new());
    let config = AssistantConfig {
        progress_key: "custom_progress".to_string(),
        ..AssistantConfig::default()
    };
    let mut assistant = Assistant::from_config(&config, Some(user()), Arc::clone(&store));
    complete(&mut assistant, CategoryId::Stress);
    assistant.accept_plan().unwrap();

    assert!(store.contains("custom_progress").unwrap());
    assert!(!store.contains(USER_PROGRESS).unwrap());
}

#[test]
fn view_reflects_current_state() {
    let mut assistant = Assistant::new(Some(user()), MemoryStore::new());
    assistant.send("I feel down").unwrap();
    assistant.start_assessment(CategoryId::Anxiety).unwrap();

    let view = assistant.view();
    assert_eq!(view.messages.len(), 2);
    assert!(view.is_typing);
    assert_eq!(view.assessment.as_ref().unwrap().category, CategoryId::Anxiety);
    assert!(view.pending_plan.is_none());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["assessment"]["category_name"], "Anxiety Disorders");
}
