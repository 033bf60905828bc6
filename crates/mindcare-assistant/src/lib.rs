//! mindcare-assistant
//!
//! The conversational core: keyword-driven replies, the assessment state
//! machine, plan templates and the append-only transcript, tied together
//! by [`Assistant`]. No rendering — the presentation layer reads
//! [`AssistantView`] and calls back with user actions.

pub mod assessment;
pub mod assistant;
pub mod config;
pub mod error;
pub mod events;
pub mod plan;
pub mod responder;
pub mod telemetry;
pub mod transcript;
pub mod typing;

pub use assistant::{AnswerOutcome, Assistant, AssistantView, PlanAcceptance};
pub use error::AssistantError;
