use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    Category, ErrorResponse, FeedbackRequest, FeedbackResponse, HealthResponse, MatchIdeasRequest,
    MatchIdeasResponse,
};
use crate::services::InMemoryCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<InMemoryCatalog>,
    pub matcher: Matcher,
}

/// Configure all idea-related routes
///
/// Literal segments are registered before `{id}` so `/ideas/match` never
/// resolves as an idea lookup.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ideas/match", web::post().to(match_ideas))
        .route("/ideas/category/{category}", web::get().to(ideas_by_category))
        .route("/ideas", web::get().to(list_ideas))
        .route("/ideas/{id}", web::get().to(get_idea))
        .route("/ideas/{id}/feedback", web::post().to(submit_feedback));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match ideas endpoint
///
/// POST /api/v1/ideas/match
///
/// Request body:
/// ```json
/// {
///   "organizationType": "Sports Team",
///   "budgetRange": "Low (Under $5,000)",
///   "targetAudience": { "ageGroups": ["18-24"], "fanTypes": ["Casual"] },
///   "goals": ["Improve Game/Event Attendance"]
/// }
/// ```
///
/// All fields are optional; unknown fields and out-of-vocabulary values are
/// ignored. A completely empty profile is rejected here, not in the core.
async fn match_ideas(
    state: web::Data<AppState>,
    req: web::Json<MatchIdeasRequest>,
) -> impl Responder {
    if req.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "empty_profile".to_string(),
            message: "User profile data is required".to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();
    tracing::debug!("Matching ideas for profile: {:?}", profile);

    match state.matcher.match_ideas(state.catalog.as_ref(), &profile).await {
        Ok(result) => {
            tracing::info!(
                "Returning {} ideas ({} primary, expanded: {})",
                result.ideas.len(),
                result.primary_count,
                result.expanded
            );

            HttpResponse::Ok().json(MatchIdeasResponse {
                total_results: result.ideas.len(),
                expanded: result.expanded,
                ideas: result.ideas,
            })
        }
        Err(e) => {
            tracing::error!("Failed to match ideas: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "match_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List the full catalog
///
/// GET /api/v1/ideas
async fn list_ideas(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.all())
}

/// Get a single idea by id
///
/// GET /api/v1/ideas/{id}
async fn get_idea(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(idea) => HttpResponse::Ok().json(idea),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Idea not found: {}", id),
            status_code: 404,
        }),
    }
}

/// List ideas in a category
///
/// GET /api/v1/ideas/category/{category}
///
/// An unknown category yields an empty list, consistent with the lenient
/// vocabulary handling on the match endpoint.
async fn ideas_by_category(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();

    let ideas = match raw.parse::<Category>() {
        Ok(category) => state.catalog.by_category(category),
        Err(_) => {
            tracing::debug!("Unknown category requested: {}", raw);
            Vec::new()
        }
    };

    HttpResponse::Ok().json(ideas)
}

/// Submit feedback for an idea
///
/// POST /api/v1/ideas/{id}/feedback
///
/// Acknowledgement only; feedback is logged, not stored.
async fn submit_feedback(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<FeedbackRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = path.into_inner();
    if state.catalog.get(&id).is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Idea not found: {}", id),
            status_code: 404,
        });
    }

    tracing::info!(
        "Received feedback for idea {}: rating={}, comment={:?}",
        id,
        req.rating,
        req.comment
    );

    HttpResponse::Ok().json(FeedbackResponse {
        message: "Feedback received successfully".to_string(),
        idea_id: id,
        feedback_id: uuid::Uuid::new_v4().to_string(),
    })
}
