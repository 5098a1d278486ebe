use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserProfile;

/// Request to match ideas against an organization profile
///
/// Enumerated values arrive as plain strings so a stale or creative client
/// never breaks the pipeline: values outside the vocabulary are dropped when
/// converting to a typed profile, which is the same as not sending them.
/// Unknown JSON fields are ignored by serde's default behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchIdeasRequest {
    #[serde(default)]
    pub organization_type: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub target_audience: RawTargetAudience,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Audience part of the match request, still string-typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTargetAudience {
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub fan_types: Vec<String>,
}

impl MatchIdeasRequest {
    /// True when no field carries any value at all
    pub fn is_empty(&self) -> bool {
        self.organization_type.is_none()
            && self.budget_range.is_none()
            && self.target_audience.age_groups.is_empty()
            && self.target_audience.fan_types.is_empty()
            && self.goals.is_empty()
    }

    /// Convert to a typed profile, silently dropping out-of-vocabulary values
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            organization_type: self.organization_type.as_deref().and_then(|s| s.parse().ok()),
            budget_range: self.budget_range.as_deref().and_then(|s| s.parse().ok()),
            age_groups: parse_known(&self.target_audience.age_groups),
            fan_types: parse_known(&self.target_audience.fan_types),
            goals: parse_known(&self.goals),
        }
    }
}

/// Parse every in-vocabulary value, dropping unknowns and duplicates
fn parse_known<T>(values: &[String]) -> Vec<T>
where
    T: std::str::FromStr + PartialEq,
{
    let mut parsed = Vec::new();
    for value in values {
        if let Ok(v) = value.parse::<T>() {
            if !parsed.contains(&v) {
                parsed.push(v);
            }
        }
    }
    parsed
}

/// Request to leave feedback on an idea
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}
