use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::CategoryId;
use super::plan::TherapyPlan;

/// A single entry in the chat transcript.
///
/// Messages are immutable once created; the transcript only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: jiff::Timestamp,
    pub kind: MessageKind,
    pub payload: Option<MessagePayload>,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

/// How the presentation layer should render a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MessageKind {
    Text,
    /// Offers quick-start assessment buttons.
    Suggestion,
    /// Carries an accepted therapy plan.
    Plan,
}

/// Structured data attached to non-text messages.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum MessagePayload {
    Suggestions {
        /// Categories offered as quick-start buttons, in catalog order.
        categories: Vec<CategoryId>,
        /// The category whose keywords matched the user's text.
        matched: CategoryId,
    },
    Plan {
        plan: TherapyPlan,
    },
}

impl Message {
    fn new(
        text: impl Into<String>,
        sender: Sender,
        kind: MessageKind,
        payload: Option<MessagePayload>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: jiff::Timestamp::now(),
            kind,
            payload,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, MessageKind::Text, None)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot, MessageKind::Text, None)
    }

    pub fn suggestion(
        text: impl Into<String>,
        categories: Vec<CategoryId>,
        matched: CategoryId,
    ) -> Self {
        Self::new(
            text,
            Sender::Bot,
            MessageKind::Suggestion,
            Some(MessagePayload::Suggestions {
                categories,
                matched,
            }),
        )
    }

    pub fn plan(text: impl Into<String>, plan: TherapyPlan) -> Self {
        Self::new(
            text,
            Sender::Bot,
            MessageKind::Plan,
            Some(MessagePayload::Plan { plan }),
        )
    }

    /// Categories offered by a suggestion message; empty for other kinds.
    pub fn suggested_categories(&self) -> &[CategoryId] {
        match &self.payload {
            Some(MessagePayload::Suggestions { categories, .. }) => categories.as_slice(),
            _ => &[],
        }
    }
}
