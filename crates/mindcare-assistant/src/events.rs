use serde::Serialize;
use tracing::info;

/// A structured event for assistant state changes worth keeping a record
/// of: assessments started, cancelled or completed and plans accepted or
/// dismissed.
///
/// Emitted via `tracing`, so they land wherever the subscriber installed by
/// [`crate::telemetry::init`] writes.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub user_id: String,
    pub details: Option<serde_json::Value>,
}

impl AssistantEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            user_id: user_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            event.action = %self.action,
            event.resource_type = %self.resource_type,
            event.resource_id = %self.resource_id,
            event.user_id = %self.user_id,
            event.details = %details,
            "assistant event"
        );
    }
}
