//! Business-idea generation from a user's skills and current interest.
//!
//! This is the only feature wrapped in the transient-failure retry loop: it runs on
//! dashboard load, when the upstream model is most often overloaded.

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::IDEAS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::BLOCK_FORMAT_INSTRUCTION;
use crate::llm_client::retry::{with_retry, RetryPolicy};
use crate::llm_client::TextGenerator;
use crate::parsing::records::Idea;
use crate::parsing::{parse_records, ParseOptions};

pub const IDEA_COUNT: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub interest: String,
}

/// Generates exactly `IDEA_COUNT` ideas, retrying on upstream overload.
pub async fn generate_ideas(
    llm: &dyn TextGenerator,
    request: &IdeaRequest,
    options: ParseOptions,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<Vec<Idea>, AppError> {
    let prompt = build_prompt(request);

    let raw = with_retry(policy, cancel, || llm.generate(&prompt))
        .await
        .map_err(|e| AppError::from_llm("Idea generation", e))?;

    let ideas = parse_records::<Idea>(&raw, IDEA_COUNT, &(), options)?;
    info!("Generated {} ideas for {} skills", ideas.len(), request.skills.len());
    Ok(ideas)
}

fn build_prompt(request: &IdeaRequest) -> String {
    let interest = match request.interest.trim() {
        "" => "none specified",
        interest => interest,
    };
    let body = IDEAS_PROMPT_TEMPLATE
        .replace("{count}", &IDEA_COUNT.to_string())
        .replace("{skills}", &request.skills.join(", "))
        .replace("{interest}", interest);
    format!("{body}\n\n{BLOCK_FORMAT_INSTRUCTION}")
}
