use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer collected during an assessment.
///
/// The variant mirrors the kind of question it answers. Validation against
/// the question itself lives in `mindcare-instruments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    /// Free text.
    Text(String),
    /// A point on the 1–10 scale.
    Scale(u8),
    /// One of the listed options, by label.
    Choice(String),
    /// Yes / No.
    YesNo(bool),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }
}
