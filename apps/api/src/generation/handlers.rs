//! Axum route handlers for the Generation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::brand_names::{generate_brand_names, BrandNameRequest};
use crate::generation::business_plan::{generate_business_plan, BusinessPlanRequest};
use crate::generation::domains::{check_domains, DomainRequest};
use crate::generation::ideas::{generate_ideas, IdeaRequest};
use crate::generation::interview::{generate_questions, InterviewQuestion, InterviewRequest};
use crate::generation::logos::{generate_logo_concepts, LogoRequest};
use crate::generation::resume_analysis::{analyze_resume, extract_resume_text, ResumeAnalysis};
use crate::parsing::records::{BrandName, BusinessPlan, DomainCheck, Idea, LogoConcept};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Serialize)]
pub struct BrandNamesResponse {
    pub brand_names: Vec<BrandName>,
}

#[derive(Debug, Serialize)]
pub struct LogoConceptsResponse {
    pub concepts: Vec<LogoConcept>,
}

#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<DomainCheck>,
}

#[derive(Debug, Serialize)]
pub struct BusinessPlanResponse {
    pub plan: BusinessPlan,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ideas
///
/// Returns exactly five ideas. Overloads are retried with backoff; the retry loop
/// stops early if the server starts shutting down.
pub async fn handle_ideas(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<IdeasResponse>, AppError> {
    if request.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let cancel = state.shutdown.child_token();
    let ideas = generate_ideas(
        state.llm.as_ref(),
        &request,
        state.parse_options,
        &state.retry_policy,
        &cancel,
    )
    .await?;

    Ok(Json(IdeasResponse { ideas }))
}

/// POST /api/v1/brand-names
pub async fn handle_brand_names(
    State(state): State<AppState>,
    Json(request): Json<BrandNameRequest>,
) -> Result<Json<BrandNamesResponse>, AppError> {
    if request.idea.title.trim().is_empty() {
        return Err(AppError::Validation("idea.title cannot be empty".to_string()));
    }

    let brand_names =
        generate_brand_names(state.llm.as_ref(), &request, state.parse_options).await?;

    Ok(Json(BrandNamesResponse { brand_names }))
}

/// POST /api/v1/logos
pub async fn handle_logos(
    State(state): State<AppState>,
    Json(request): Json<LogoRequest>,
) -> Result<Json<LogoConceptsResponse>, AppError> {
    require_brand(&request.brand_name)?;

    let concepts =
        generate_logo_concepts(state.llm.as_ref(), &request, state.parse_options).await?;

    Ok(Json(LogoConceptsResponse { concepts }))
}

/// POST /api/v1/domains
///
/// Availability is the model's estimate, not a registrar lookup.
pub async fn handle_domains(
    State(state): State<AppState>,
    Json(request): Json<DomainRequest>,
) -> Result<Json<DomainsResponse>, AppError> {
    require_brand(&request.brand_name)?;

    let domains = check_domains(state.llm.as_ref(), &request, state.parse_options).await?;

    Ok(Json(DomainsResponse { domains }))
}

/// POST /api/v1/business-plan
pub async fn handle_business_plan(
    State(state): State<AppState>,
    Json(request): Json<BusinessPlanRequest>,
) -> Result<Json<BusinessPlanResponse>, AppError> {
    if request.idea.title.trim().is_empty() {
        return Err(AppError::Validation("idea.title cannot be empty".to_string()));
    }
    require_brand(&request.brand_name.name)?;
    if request.target_market.trim().is_empty() {
        return Err(AppError::Validation("target_market cannot be empty".to_string()));
    }
    if request.funding_goal.trim().is_empty() {
        return Err(AppError::Validation("funding_goal cannot be empty".to_string()));
    }

    let plan = generate_business_plan(state.llm.as_ref(), &request, state.parse_options).await?;

    Ok(Json(BusinessPlanResponse { plan }))
}

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let questions = generate_questions(state.llm.as_ref(), &request).await?;

    Ok(Json(InterviewQuestionsResponse { questions }))
}

/// POST /analyze-resume
///
/// Multipart body: `resume` (PDF file) and `jobDesc` (text). Other fields are ignored.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                resume = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read resume upload: {e}"))
                })?);
            }
            Some("jobDesc") => {
                job_desc = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read jobDesc field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let resume = resume
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("Resume file is required".to_string()))?;
    let job_desc = job_desc
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("jobDesc cannot be empty".to_string()))?;

    let resume_text = extract_resume_text(resume).await?;
    let analysis = analyze_resume(state.llm.as_ref(), &resume_text, &job_desc).await?;

    Ok(Json(analysis))
}

fn require_brand(brand_name: &str) -> Result<(), AppError> {
    if brand_name.trim().is_empty() {
        return Err(AppError::Validation("brand_name cannot be empty".to_string()));
    }
    Ok(())
}
