use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;
use crate::parsing::ParseOptions;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Single browser origin allowed by CORS (the SPA dev server by default).
    pub cors_origin: String,
    pub strict_parsing: bool,
    pub skip_unrecognized_blocks: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            strict_parsing: flag_env("STRICT_PARSING")?,
            skip_unrecognized_blocks: flag_env("SKIP_UNRECOGNIZED_BLOCKS")?,
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict_parsing,
            skip_unrecognized_blocks: self.skip_unrecognized_blocks,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional boolean variable; unset means `false`.
fn flag_env(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value)
            .with_context(|| format!("{key} must be true/false, got '{value}'")),
        Err(_) => Ok(false),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_options_from_config() {
        let config = Config {
            gemini_api_key: "key".to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            port: 5000,
            rust_log: "info".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
            strict_parsing: true,
            skip_unrecognized_blocks: false,
        };
        assert_eq!(config.parse_options(), ParseOptions::strict());
    }
}
