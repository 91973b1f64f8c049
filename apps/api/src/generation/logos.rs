//! Logo concept suggestions. Image rendering happens elsewhere; this only produces the brief.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::LOGO_PROMPT_TEMPLATE;
use crate::llm_client::prompts::BLOCK_FORMAT_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::parsing::records::LogoConcept;
use crate::parsing::{parse_records, ParseOptions};

pub const LOGO_CONCEPT_COUNT: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct LogoRequest {
    pub brand_name: String,
    #[serde(default)]
    pub color_preference: Option<String>,
    #[serde(default)]
    pub style_preference: Option<String>,
    #[serde(default)]
    pub custom_expectations: Option<String>,
}

pub async fn generate_logo_concepts(
    llm: &dyn TextGenerator,
    request: &LogoRequest,
    options: ParseOptions,
) -> Result<Vec<LogoConcept>, AppError> {
    let brand = request.brand_name.trim();
    let raw = llm
        .generate(&build_prompt(request))
        .await
        .map_err(|e| AppError::from_llm("Logo suggestion", e))?;

    let concepts = parse_records::<LogoConcept>(&raw, LOGO_CONCEPT_COUNT, brand, options)?;
    info!("Generated {} logo concepts for {brand:?}", concepts.len());
    Ok(concepts)
}

fn build_prompt(request: &LogoRequest) -> String {
    let body = LOGO_PROMPT_TEMPLATE
        .replace("{count}", &LOGO_CONCEPT_COUNT.to_string())
        .replace("{brand}", request.brand_name.trim())
        .replace(
            "{colors}",
            preference(&request.color_preference, "modern and professional"),
        )
        .replace(
            "{style}",
            preference(&request.style_preference, "minimalist"),
        )
        .replace(
            "{expectations}",
            preference(&request.custom_expectations, "None specified"),
        );
    format!("{body}\n\n{BLOCK_FORMAT_INSTRUCTION}")
}

fn preference<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}
