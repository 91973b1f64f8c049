//! One-page business plan for an idea and brand.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::BUSINESS_PLAN_PROMPT_TEMPLATE;
use crate::llm_client::TextGenerator;
use crate::parsing::records::{BrandName, BusinessPlan, Idea, PlanContext};
use crate::parsing::{parse_record, ParseOptions};

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessPlanRequest {
    pub idea: Idea,
    pub brand_name: BrandName,
    pub target_market: String,
    pub funding_goal: String,
}

pub async fn generate_business_plan(
    llm: &dyn TextGenerator,
    request: &BusinessPlanRequest,
    options: ParseOptions,
) -> Result<BusinessPlan, AppError> {
    let raw = llm
        .generate(&build_prompt(request))
        .await
        .map_err(|e| AppError::from_llm("Business plan generation", e))?;

    let ctx = PlanContext {
        target_market: request.target_market.trim().to_string(),
        funding_goal: request.funding_goal.trim().to_string(),
    };
    let plan = parse_record::<BusinessPlan>(&raw, &ctx, options)?;
    info!(
        "Generated business plan for {:?} with {} next steps",
        request.brand_name.name,
        plan.next_steps.len()
    );
    Ok(plan)
}

fn build_prompt(request: &BusinessPlanRequest) -> String {
    BUSINESS_PLAN_PROMPT_TEMPLATE
        .replace("{title}", &request.idea.title)
        .replace("{description}", &request.idea.description)
        .replace("{brand}", &request.brand_name.name)
        .replace("{market}", request.target_market.trim())
        .replace("{funding}", request.funding_goal.trim())
}
