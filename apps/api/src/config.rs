use anyhow::{Context, Result};

const DEFAULT_NARRATIVE_BASE_URL: &str = "https://chat.dartmouth.edu/api";
const DEFAULT_NARRATIVE_MODEL: &str = "anthropic.claude-3-5-haiku-20241022";

/// Application configuration loaded from environment variables.
/// Everything has a default except the narrative API key, which is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
    /// Upload size cap in bytes.
    pub max_upload_size: usize,
    pub narrative: NarrativeConfig,
}

/// Settings for the OpenAI-compatible chat endpoint behind `/api/narrative`.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// `None` when `NARRATIVE_API_KEY` is unset or blank.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
            max_upload_size: std::env::var("MAX_UPLOAD_SIZE")
                .unwrap_or_else(|_| "10485760".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_SIZE must be a byte count")?,
            narrative: NarrativeConfig {
                api_key: optional_env("NARRATIVE_API_KEY"),
                base_url: optional_env("NARRATIVE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_NARRATIVE_BASE_URL.to_string()),
                model: optional_env("NARRATIVE_MODEL")
                    .unwrap_or_else(|| DEFAULT_NARRATIVE_MODEL.to_string()),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://career.example.edu ,"),
            vec!["http://localhost:5173", "https://career.example.edu"]
        );
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("").is_empty());
    }
}
