use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, MatchSearchRequest, PoolResponse};
use crate::services::ProfileStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub matcher: Matcher,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/candidates/match", web::post().to(match_candidates))
        .route("/candidates/pool", web::get().to(pool_summary));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Candidate matching endpoint
///
/// POST /api/v1/candidates/match
///
/// Request body:
/// ```json
/// {
///   "jobDescription": "Senior Frontend Engineer, React and TypeScript...",
///   "jobTitle": "Senior React Engineer",
///   "limit": 8
/// }
/// ```
async fn match_candidates(
    state: web::Data<AppState>,
    req: web::Json<MatchSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to keep response sizes bounded
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "Matching {} candidates against query ({} chars), limit {}",
        state.store.len(),
        req.job_description.len(),
        limit
    );

    let outcome = state.matcher.match_candidates(
        state.store.profiles().to_vec(),
        &req.job_description,
        &req.job_title,
        limit,
    );

    tracing::info!(
        "Returning {} of {} matching candidates",
        outcome.showing,
        outcome.total_matches
    );

    HttpResponse::Ok().json(outcome)
}

/// Candidate pool summary
///
/// GET /api/v1/candidates/pool
///
/// Reports pool size and source file, for operational visibility.
async fn pool_summary(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PoolResponse {
        candidates: state.store.len(),
        source: state.store.source().display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
