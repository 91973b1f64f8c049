//! Resume vs job-description analysis: ATS score plus improvement suggestions.
//!
//! The model is asked for JSON. When it answers in prose instead, a line parser
//! recovers the score (first line mentioning `ats_score`) and every `-` bullet.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::RESUME_ANALYSIS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{parse_json_response, TextGenerator};
use crate::parsing::blocks::normalize_newlines;
use crate::parsing::normalize::parse_leading_int;

const RESUME_PROMPT_CHARS: usize = 2000;
const JOB_DESC_PROMPT_CHARS: usize = 1000;
const DEFAULT_ATS_SCORE: u8 = 50;
const MAX_ATS_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub ats_score: u8,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Extracts text from an uploaded PDF. Runs on the blocking pool.
pub async fn extract_resume_text(pdf: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))?
        .map_err(|e| AppError::Validation(format!("Could not read resume PDF: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation(
            "Resume PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}

pub async fn analyze_resume(
    llm: &dyn TextGenerator,
    resume_text: &str,
    job_desc: &str,
) -> Result<ResumeAnalysis, AppError> {
    let raw = llm
        .generate(&build_prompt(resume_text, job_desc))
        .await
        .map_err(|e| AppError::from_llm("Resume analysis", e))?;

    let analysis = parse_analysis(&raw);
    info!(
        "Resume analysed: ats_score={}, {} suggestions",
        analysis.ats_score,
        analysis.suggestions.len()
    );
    Ok(analysis)
}

fn build_prompt(resume_text: &str, job_desc: &str) -> String {
    let body = RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume}", &take_chars(resume_text, RESUME_PROMPT_CHARS))
        .replace("{job_desc}", &take_chars(job_desc, JOB_DESC_PROMPT_CHARS));
    format!("{body}\n\n{JSON_ONLY_INSTRUCTION}")
}

fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Parses the model output, preferring JSON and falling back to line scanning.
fn parse_analysis(raw: &str) -> ResumeAnalysis {
    match parse_json_response::<ResumeAnalysis>(raw) {
        Ok(mut analysis) => {
            analysis.ats_score = analysis.ats_score.min(MAX_ATS_SCORE);
            analysis
        }
        Err(e) => {
            warn!("Resume analysis was not valid JSON ({e}); using line fallback");
            parse_analysis_lines(raw)
        }
    }
}

fn parse_analysis_lines(raw: &str) -> ResumeAnalysis {
    let text = normalize_newlines(raw);

    let ats_score = text
        .lines()
        .find(|line| line.to_ascii_lowercase().contains("ats_score"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| parse_leading_int(Some(value.trim_start_matches(|c: char| !c.is_ascii_digit()))))
        .map(|score| score.min(u32::from(MAX_ATS_SCORE)) as u8)
        .unwrap_or(DEFAULT_ATS_SCORE);

    let suggestions = text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .map(|line| line.trim_start_matches('-').trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    ResumeAnalysis {
        ats_score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedGenerator;

    #[test]
    fn test_parse_json_analysis() {
        let raw = r#"{"ats_score": 72, "suggestions": ["Add Kubernetes", "Quantify impact"]}"#;
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.ats_score, 72);
        assert_eq!(analysis.suggestions.len(), 2);
    }

    #[test]
    fn test_json_score_is_clamped() {
        let analysis = parse_analysis(r#"{"ats_score": 140, "suggestions": []}"#);
        assert_eq!(analysis.ats_score, 100);
    }

    #[test]
    fn test_fallback_parses_score_and_bullets() {
        let raw = "Here is my analysis.\nATS_Score: 64\n- Add Docker experience\n  - Mention team size\nSummary line";
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.ats_score, 64);
        assert_eq!(
            analysis.suggestions,
            vec!["Add Docker experience", "Mention team size"]
        );
    }

    #[test]
    fn test_fallback_handles_quoted_json_like_score() {
        let analysis = parse_analysis("\"ats_score\": 81,\n- Add metrics");
        assert_eq!(analysis.ats_score, 81);
    }

    #[test]
    fn test_fallback_default_score() {
        let analysis = parse_analysis("I could not read the resume.");
        assert_eq!(analysis.ats_score, DEFAULT_ATS_SCORE);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_prompt_truncates_inputs() {
        let resume = "r".repeat(5000);
        let jd = "j".repeat(3000);
        let prompt = build_prompt(&resume, &jd);
        assert!(prompt.contains(&"r".repeat(RESUME_PROMPT_CHARS)));
        assert!(!prompt.contains(&"r".repeat(RESUME_PROMPT_CHARS + 1)));
        assert!(!prompt.contains(&"j".repeat(JOB_DESC_PROMPT_CHARS + 1)));
    }

    #[tokio::test]
    async fn test_analyze_resume_end_to_end() {
        let llm = ScriptedGenerator::new(vec![Ok(
            "```json\n{\"ats_score\": 55, \"suggestions\": [\"Add SQL\"]}\n```".to_string()
        )]);
        let analysis = analyze_resume(&llm, "Rust developer", "Needs SQL").await.unwrap();
        assert_eq!(
            analysis,
            ResumeAnalysis {
                ats_score: 55,
                suggestions: vec!["Add SQL".to_string()],
            }
        );
    }
}
