use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use super::plan::TherapyPlan;

/// The progress record written to the storage collaborator when a plan is
/// accepted. Always written wholesale under a single key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersistedProgress {
    pub user_id: String,
    pub current_plan: TherapyPlan,
    pub start_timestamp: jiff::Timestamp,
    #[serde(default)]
    pub completed_modules: BTreeSet<String>,
    pub assessment_answers: Vec<Answer>,
}

impl PersistedProgress {
    /// A fresh record for a newly accepted plan; no modules completed yet.
    pub fn started(
        user_id: impl Into<String>,
        plan: TherapyPlan,
        answers: Vec<Answer>,
        start_timestamp: jiff::Timestamp,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            current_plan: plan,
            start_timestamp,
            completed_modules: BTreeSet::new(),
            assessment_answers: answers,
        }
    }
}
