//! Brand-name suggestions for a chosen business idea.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::BRAND_NAMES_PROMPT_TEMPLATE;
use crate::llm_client::prompts::BLOCK_FORMAT_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::parsing::records::{BrandName, Idea};
use crate::parsing::{parse_records, ParseOptions};

pub const BRAND_NAME_COUNT: usize = 5;
const DEFAULT_STYLE: &str = "creative";

#[derive(Debug, Clone, Deserialize)]
pub struct BrandNameRequest {
    pub idea: Idea,
    #[serde(default)]
    pub style: Option<String>,
}

pub async fn generate_brand_names(
    llm: &dyn TextGenerator,
    request: &BrandNameRequest,
    options: ParseOptions,
) -> Result<Vec<BrandName>, AppError> {
    let raw = llm
        .generate(&build_prompt(request))
        .await
        .map_err(|e| AppError::from_llm("Brand name generation", e))?;

    let names = parse_records::<BrandName>(&raw, BRAND_NAME_COUNT, &(), options)?;
    info!("Generated brand names for idea {:?}", request.idea.title);
    Ok(names)
}

fn build_prompt(request: &BrandNameRequest) -> String {
    let style = request
        .style
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_STYLE);
    let body = BRAND_NAMES_PROMPT_TEMPLATE
        .replace("{count}", &BRAND_NAME_COUNT.to_string())
        .replace("{title}", &request.idea.title)
        .replace("{description}", &request.idea.description)
        .replace("{style}", style);
    format!("{body}\n\n{BLOCK_FORMAT_INSTRUCTION}")
}
