use serde::{Deserialize, Serialize};

use crate::models::vocab::{
    AgeGroup, BudgetRange, Category, Difficulty, FanType, Goal, OrganizationType, Resource,
    SuccessMetric,
};

/// Catalog entry describing one engagement idea
///
/// Immutable once loaded; the catalog collaborator validates every record
/// before serving it (non-empty enumerated sets, unique id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub organization_types: Vec<OrganizationType>,
    #[serde(default)]
    pub target_audience: TargetAudience,
    pub budget_range: BudgetRange,
    pub implementation_difficulty: Difficulty,
    pub required_resources: Vec<Resource>,
    pub success_metrics: Vec<SuccessMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_case_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Audience an idea is aimed at; both lists may be empty ("any audience")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    #[serde(default)]
    pub age_groups: Vec<AgeGroup>,
    #[serde(default)]
    pub fan_types: Vec<FanType>,
}

/// Per-request matching input, already reduced to vocabulary values
///
/// All fields are optional constraints; an empty profile matches everything.
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub organization_type: Option<OrganizationType>,
    pub budget_range: Option<BudgetRange>,
    pub age_groups: Vec<AgeGroup>,
    pub fan_types: Vec<FanType>,
    pub goals: Vec<Goal>,
}

impl UserProfile {
    /// True when the profile requests an audience constraint
    pub fn has_audience(&self) -> bool {
        !self.age_groups.is_empty() || !self.fan_types.is_empty()
    }
}

/// Result caps for the match pipeline
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    /// Hard cap on returned ideas, applied to the primary query and to the
    /// final output
    pub max_results: usize,
    /// Primary counts below this trigger the fallback expansion
    pub expansion_threshold: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_results: 10,
            expansion_threshold: 5,
        }
    }
}
