use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of a mental-health focus area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryId {
    Anxiety,
    Depression,
    Stress,
    Trauma,
    Relationships,
    Sleep,
    Addiction,
    Eating,
}

impl CategoryId {
    /// Every category, in catalog display order.
    pub const ALL: [CategoryId; 8] = [
        CategoryId::Anxiety,
        CategoryId::Depression,
        CategoryId::Stress,
        CategoryId::Trauma,
        CategoryId::Relationships,
        CategoryId::Sleep,
        CategoryId::Addiction,
        CategoryId::Eating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Anxiety => "anxiety",
            CategoryId::Depression => "depression",
            CategoryId::Stress => "stress",
            CategoryId::Trauma => "trauma",
            CategoryId::Relationships => "relationships",
            CategoryId::Sleep => "sleep",
            CategoryId::Addiction => "addiction",
            CategoryId::Eating => "eating",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Display metadata for a category. Static; defined once in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: String,
    /// Icon name understood by the presentation layer (e.g. `"zap"`).
    pub icon: String,
    /// Colour gradient reference (e.g. `"from-yellow-500 to-orange-500"`).
    pub color: String,
}
