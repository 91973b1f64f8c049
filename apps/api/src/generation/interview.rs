//! Mock interview question generation (JSON output, validated before it reaches the client).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::INTERVIEW_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json, TextGenerator};

const MAX_QUESTIONS: u32 = 20;
const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterviewRequest {
    pub category: String,
    #[serde(default)]
    pub exam_type: Option<String>,
    #[serde(default)]
    pub level: Difficulty,
    pub num_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

pub async fn generate_questions(
    llm: &dyn TextGenerator,
    request: &InterviewRequest,
) -> Result<Vec<InterviewQuestion>, AppError> {
    validate_request(request)?;

    let questions: Vec<InterviewQuestion> = generate_json(llm, &build_prompt(request))
        .await
        .map_err(|e| AppError::from_llm("Interview question generation", e))?;

    if let Some((index, reason)) = first_invalid(&questions) {
        warn!("Interview question {index} rejected: {reason}");
        return Err(AppError::Llm(format!(
            "Invalid question format received from model (question {index}: {reason})"
        )));
    }

    info!(
        "Generated {} {} questions for {:?}",
        questions.len(),
        request.level.as_str(),
        request.category
    );
    Ok(questions)
}

fn validate_request(request: &InterviewRequest) -> Result<(), AppError> {
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }
    if request.num_questions == 0 || request.num_questions > MAX_QUESTIONS {
        return Err(AppError::Validation(format!(
            "num_questions must be between 1 and {MAX_QUESTIONS}"
        )));
    }
    Ok(())
}

fn build_prompt(request: &InterviewRequest) -> String {
    let exam = request
        .exam_type
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or("general assessment");
    let body = INTERVIEW_PROMPT_TEMPLATE
        .replace("{count}", &request.num_questions.to_string())
        .replace("{category}", request.category.trim())
        .replace("{exam}", exam)
        .replace("{level}", request.level.as_str());
    format!("{body}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Returns the first question that cannot be shown, with the reason.
fn first_invalid(questions: &[InterviewQuestion]) -> Option<(usize, &'static str)> {
    if questions.is_empty() {
        return Some((0, "no questions returned"));
    }
    questions.iter().enumerate().find_map(|(i, q)| {
        let reason = if q.question.trim().is_empty() {
            "empty question"
        } else if q.options.len() < MIN_OPTIONS {
            "fewer than two options"
        } else if q.correct_answer.trim().is_empty() {
            "missing correct answer"
        } else {
            return None;
        };
        Some((i, reason))
    })
}
