pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

/// Upper bound for resume uploads.
const RESUME_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(health::hello_handler))
        .route("/health", get(health::health_handler))
        // Founder toolkit
        .route("/api/v1/ideas", post(handlers::handle_ideas))
        .route("/api/v1/brand-names", post(handlers::handle_brand_names))
        .route("/api/v1/logos", post(handlers::handle_logos))
        .route("/api/v1/domains", post(handlers::handle_domains))
        .route("/api/v1/business-plan", post(handlers::handle_business_plan))
        // Career tools
        .route(
            "/api/v1/interview/questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/analyze-resume",
            post(handlers::handle_analyze_resume).layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT)),
        )
        .with_state(state)
}
