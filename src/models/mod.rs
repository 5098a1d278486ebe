// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod vocab;

pub use domain::{Idea, MatchLimits, TargetAudience, UserProfile};
pub use requests::{FeedbackRequest, MatchIdeasRequest, RawTargetAudience};
pub use responses::{ErrorResponse, FeedbackResponse, HealthResponse, MatchIdeasResponse};
pub use vocab::{
    AgeGroup, BudgetRange, Category, Difficulty, FanType, Goal, OrganizationType, Resource,
    SuccessMetric, UnknownValue,
};
