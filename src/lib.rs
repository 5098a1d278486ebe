//! Engage Algo - idea matching service for the Engage fan engagement platform
//!
//! This library turns an organization profile into a filtered, ranked,
//! bounded list of engagement ideas: a predicate-based candidate filter, a
//! scarcity-triggered fallback expansion, and a stable goal-relevance
//! ranking over a validated idea catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{GoalMetricsMap, IdeaPredicate, MatchResult, Matcher};
pub use models::{Idea, MatchIdeasRequest, MatchIdeasResponse, MatchLimits, UserProfile};
pub use services::{CatalogError, IdeaCatalog, InMemoryCatalog};
