//! Domain-name assessment for a brand.
//!
//! The model only estimates availability; no registrar or WHOIS lookup is made.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::DOMAIN_PROMPT_TEMPLATE;
use crate::llm_client::prompts::BLOCK_FORMAT_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::parsing::records::{DomainCheck, DomainContext};
use crate::parsing::{parse_records, ParseOptions};

#[derive(Debug, Clone, Deserialize)]
pub struct DomainRequest {
    pub brand_name: String,
}

pub async fn check_domains(
    llm: &dyn TextGenerator,
    request: &DomainRequest,
    options: ParseOptions,
) -> Result<Vec<DomainCheck>, AppError> {
    let brand = request.brand_name.trim();
    let ctx = DomainContext::for_brand(brand);
    let raw = llm
        .generate(&build_prompt(brand, &ctx))
        .await
        .map_err(|e| AppError::from_llm("Domain availability check", e))?;

    let checks = parse_records::<DomainCheck>(&raw, ctx.variations.len(), &ctx, options)?;
    info!("Assessed {} domains for {brand:?}", checks.len());
    Ok(checks)
}

fn build_prompt(brand: &str, ctx: &DomainContext) -> String {
    let body = DOMAIN_PROMPT_TEMPLATE
        .replace("{brand}", brand)
        .replace("{domains}", &ctx.variations.join("\n"));
    format!("{body}\n\n{BLOCK_FORMAT_INSTRUCTION}")
}
