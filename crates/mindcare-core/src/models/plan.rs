use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A templated therapy plan produced at the end of an assessment.
///
/// Immutable once generated. A later plan supersedes an earlier one; plans
/// are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyPlan {
    pub issue_name: String,
    pub severity_label: String,
    pub duration_label: String,
    pub recommendations: Vec<Recommendation>,
    pub daily_goals: Vec<String>,
    pub weekly_goals: Vec<String>,
    pub resources: Vec<String>,
}

/// A therapy module recommended by a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub module_id: String,
    pub title: String,
    pub description: String,
    /// 1 = highest priority.
    pub priority_rank: u8,
    pub color: String,
}
