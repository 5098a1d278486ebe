// Core algorithm exports
pub mod matcher;
pub mod predicate;
pub mod scoring;

pub use matcher::{MatchResult, Matcher};
pub use predicate::{Clause, IdeaPredicate};
pub use scoring::{goal_relevance_score, sort_by_goal_relevance, GoalMetricsMap};
