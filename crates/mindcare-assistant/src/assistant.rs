//! The assistant facade driven by the presentation layer.
//!
//! Every user action maps to one method here. State is owned by a single
//! [`Assistant`] value and every transition is synchronous; the delayed
//! bot reply is split into [`Assistant::send`] and [`Assistant::deliver`]
//! so that [`crate::typing::ReplyScheduler`] can sit in between.

use mindcare_core::models::answer::Answer;
use mindcare_core::models::category::CategoryId;
use mindcare_core::models::message::Message;
use mindcare_core::models::plan::TherapyPlan;
use mindcare_core::models::progress::PersistedProgress;
use mindcare_core::models::user::UserIdentity;
use mindcare_instruments::catalog;
use mindcare_storage::KeyValueStore;
use mindcare_storage::error::StorageError;
use mindcare_storage::state::save_progress;
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::assessment::{Assessment, AssessmentProgress, Step};
use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::events::AssistantEvent;
use crate::plan::{self, PlanSource, TemplatePlans};
use crate::responder::{ReplyChooser, Responder};
use crate::transcript::Transcript;

/// A bot reply computed at send time, waiting out the typing delay.
#[derive(Debug, Clone)]
pub struct PendingReply {
    generation: u64,
    message: Message,
}

impl PendingReply {
    pub fn message(&self) -> &Message {
        &self.message
    }
}

/// A plan produced by a completed assessment, awaiting accept or dismiss.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub category: CategoryId,
    pub plan: TherapyPlan,
    pub answers: Vec<Answer>,
}

/// Outcome of a successful [`Assistant::answer`].
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    /// Show the next question.
    Next(AssessmentProgress),
    /// The assessment finished and a plan is ready for review.
    PlanReady(TherapyPlan),
}

/// Outcome of [`Assistant::accept_plan`].
///
/// The plan message is always appended. A failed save is reported here and
/// does not undo the acceptance.
#[derive(Debug)]
pub struct PlanAcceptance {
    pub message_id: Uuid,
    pub plan: TherapyPlan,
    pub save_error: Option<StorageError>,
}

impl PlanAcceptance {
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Everything the presentation layer renders, in one value.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AssistantView {
    pub messages: Vec<Message>,
    pub is_typing: bool,
    pub assessment: Option<AssessmentProgress>,
    pub pending_plan: Option<TherapyPlan>,
}

pub struct Assistant {
    user: Option<UserIdentity>,
    transcript: Transcript,
    responder: Responder,
    assessment: Assessment,
    plans: Box<dyn PlanSource>,
    store: Box<dyn KeyValueStore>,
    progress_key: String,
    typing: bool,
    reply_generation: u64,
    pending_plan: Option<GeneratedPlan>,
    current_plan: Option<TherapyPlan>,
}

impl Assistant {
    /// A new session with default settings. The transcript starts with a
    /// greeting addressed to `user`.
    pub fn new(user: Option<UserIdentity>, store: impl KeyValueStore + 'static) -> Self {
        Self::from_config(&AssistantConfig::default(), user, store)
    }

    pub fn from_config(
        config: &AssistantConfig,
        user: Option<UserIdentity>,
        store: impl KeyValueStore + 'static,
    ) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Message::bot(greeting(user.as_ref())));

        Self {
            user,
            transcript,
            responder: Responder::new(config.chooser(), config.suggestion_limit),
            assessment: Assessment::new(),
            plans: Box::new(TemplatePlans),
            store: Box::new(store),
            progress_key: config.progress_key.clone(),
            typing: false,
            reply_generation: 0,
            pending_plan: None,
            current_plan: None,
        }
    }

    pub fn with_chooser(mut self, chooser: impl ReplyChooser + 'static) -> Self {
        self.responder.set_chooser(chooser);
        self
    }

    pub fn with_plan_source(mut self, plans: impl PlanSource + 'static) -> Self {
        self.plans = Box::new(plans);
        self
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    fn user_id(&self) -> &str {
        self.user.as_ref().map(|u| u.id.as_str()).unwrap_or_default()
    }

    pub fn transcript(&self) -> &[Message] {
        self.transcript.all()
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    /// Append the user's message and compute the bot reply.
    ///
    /// The reply is not appended yet; hand it to [`Assistant::deliver`]
    /// once the typing delay has passed. Any reply still pending from an
    /// earlier send is superseded.
    pub fn send(&mut self, text: &str) -> Result<PendingReply, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        self.transcript.append(Message::user(text));
        let message = self.responder.respond(text);

        self.reply_generation += 1;
        self.typing = true;
        Ok(PendingReply {
            generation: self.reply_generation,
            message,
        })
    }

    /// Append a pending reply unless a later send or a cancel superseded it.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if reply.generation != self.reply_generation || !self.typing {
            tracing::debug!(
                generation = reply.generation,
                current = self.reply_generation,
                "dropping superseded reply"
            );
            return false;
        }
        self.transcript.append(reply.message);
        self.typing = false;
        true
    }

    /// Drop whatever reply is pending and clear the typing flag.
    pub fn cancel_pending_reply(&mut self) {
        self.reply_generation += 1;
        self.typing = false;
    }

    /// [`send`](Self::send) and [`deliver`](Self::deliver) with no delay.
    pub fn send_now(&mut self, text: &str) -> Result<Message, AssistantError> {
        let reply = self.send(text)?;
        let message = reply.message.clone();
        self.deliver(reply);
        Ok(message)
    }

    // ── Assessment ───────────────────────────────────────────────────────

    pub fn start_assessment(
        &mut self,
        category: CategoryId,
    ) -> Result<AssessmentProgress, AssistantError> {
        self.assessment.start(category)?;
        AssistantEvent::new(
            "assessment_started",
            "assessment",
            category.as_str(),
            self.user_id(),
        )
        .with_details(serde_json::json!({
            "category_name": catalog::category(category).display_name,
        }))
        .emit();
        self.assessment
            .progress()
            .ok_or(AssistantError::NoActiveAssessment)
    }

    /// Start an assessment from a raw category identifier.
    pub fn start_assessment_by_id(
        &mut self,
        category_id: &str,
    ) -> Result<AssessmentProgress, AssistantError> {
        let category: CategoryId = category_id.parse()?;
        self.start_assessment(category)
    }

    pub fn assessment_progress(&self) -> Option<AssessmentProgress> {
        self.assessment.progress()
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// Answer the displayed question. Answering the last question generates
    /// the plan; it then waits in [`pending_plan`](Self::pending_plan).
    pub fn answer(&mut self, answer: Answer) -> Result<AnswerOutcome, AssistantError> {
        match self.assessment.answer(answer)? {
            Step::Advanced { .. } => self
                .assessment
                .progress()
                .map(AnswerOutcome::Next)
                .ok_or(AssistantError::NoActiveAssessment),
            Step::Completed(completed) => {
                let plan = self.plans.generate(completed.category, &completed.answers);
                AssistantEvent::new(
                    "assessment_completed",
                    "assessment",
                    completed.category.as_str(),
                    self.user_id(),
                )
                .with_details(serde_json::json!({
                    "answers": completed.answers.len(),
                    "plan": plan.issue_name,
                }))
                .emit();

                self.pending_plan = Some(GeneratedPlan {
                    category: completed.category,
                    plan: plan.clone(),
                    answers: completed.answers,
                });
                Ok(AnswerOutcome::PlanReady(plan))
            }
        }
    }

    pub fn back(&mut self) -> bool {
        self.assessment.back()
    }

    pub fn forward(&mut self) -> bool {
        self.assessment.forward()
    }

    pub fn cancel_assessment(&mut self) -> bool {
        let category = self.assessment.session().map(|s| s.category());
        let cancelled = self.assessment.cancel();
        if let Some(category) = category.filter(|_| cancelled) {
            AssistantEvent::new(
                "assessment_cancelled",
                "assessment",
                category.as_str(),
                self.user_id(),
            )
            .emit();
        }
        cancelled
    }

    // ── Plan ─────────────────────────────────────────────────────────────

    pub fn pending_plan(&self) -> Option<&GeneratedPlan> {
        self.pending_plan.as_ref()
    }

    /// The most recently accepted plan.
    pub fn current_plan(&self) -> Option<&TherapyPlan> {
        self.current_plan.as_ref()
    }

    /// Accept the generated plan: append a `plan` message to the transcript
    /// and overwrite the stored progress record.
    pub fn accept_plan(&mut self) -> Result<PlanAcceptance, AssistantError> {
        let generated = self.pending_plan.take().ok_or(AssistantError::NoPendingPlan)?;

        let message = Message::plan(
            plan::acceptance_text(&generated.plan),
            generated.plan.clone(),
        );
        let message_id = self.transcript.append(message).id;

        let progress = PersistedProgress::started(
            self.user_id(),
            generated.plan.clone(),
            generated.answers,
            jiff::Timestamp::now(),
        );
        let save_error = match save_progress(&*self.store, &self.progress_key, &progress) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.progress_key, "failed to save progress");
                Some(e)
            }
        };

        AssistantEvent::new(
            "plan_accepted",
            "plan",
            generated.category.as_str(),
            self.user_id(),
        )
        .with_details(serde_json::json!({ "saved": save_error.is_none() }))
        .emit();

        self.current_plan = Some(generated.plan.clone());
        Ok(PlanAcceptance {
            message_id,
            plan: generated.plan,
            save_error,
        })
    }

    /// Discard the generated plan without recording it anywhere.
    pub fn dismiss_plan(&mut self) -> bool {
        match self.pending_plan.take() {
            Some(generated) => {
                AssistantEvent::new(
                    "plan_dismissed",
                    "plan",
                    generated.category.as_str(),
                    self.user_id(),
                )
                .emit();
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> AssistantView {
        AssistantView {
            messages: self.transcript.all().to_vec(),
            is_typing: self.typing,
            assessment: self.assessment.progress(),
            pending_plan: self.pending_plan.as_ref().map(|g| g.plan.clone()),
        }
    }
}

fn greeting(user: Option<&UserIdentity>) -> String {
    let hello = match user {
        Some(user) => format!("Hello {}!", user.display_name),
        None => "Hello!".to_string(),
    };
    format!(
        "{hello} I'm your AI mental health assistant. I'm here to provide support, guidance, and help you create a personalized therapy plan. How are you feeling today?"
    )
}
