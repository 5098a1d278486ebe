use serde::{Deserialize, Serialize};

use crate::models::domain::Idea;

/// Response for the idea matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchIdeasResponse {
    pub ideas: Vec<Idea>,
    pub total_results: usize,
    /// True when the fallback expansion topped up a scarce primary result
    pub expanded: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Feedback acknowledgement response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub idea_id: String,
    pub feedback_id: String,
}
