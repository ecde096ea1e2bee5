//! Narrative feedback: builds the prompt from a finished analysis and asks the
//! chat backend for reframing suggestions.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::llm_client::{call_json, ChatCompletion, LlmError};
use crate::models::analysis::{AnalysisResult, OnboardingData};
use crate::narrative::models::NarrativeResponse;
use crate::narrative::prompts::{NARRATIVE_PROMPT_TEMPLATE, NARRATIVE_SYSTEM};

/// Bullet text longer than this is cut in the prompt.
const MAX_EXPERIENCE_CHARS: usize = 300;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Generates narrative guidance. Without onboarding answers there is nothing
/// to anchor the story on, so a fixed checklist is returned and the backend
/// is not called.
pub async fn generate_narrative(
    analysis: &AnalysisResult,
    backend: &dyn ChatCompletion,
) -> Result<NarrativeResponse, LlmError> {
    let Some(onboarding) = &analysis.onboarding_data else {
        return Ok(onboarding_fallback());
    };

    let prompt = build_prompt(analysis, onboarding);

    info!(
        "Generating narrative for word: {}, value: {}",
        onboarding.word, onboarding.career_value
    );
    debug!("Narrative prompt:\n{prompt}");

    call_json::<NarrativeResponse>(backend, NARRATIVE_SYSTEM, &prompt).await
}

pub fn onboarding_fallback() -> NarrativeResponse {
    NarrativeResponse {
        paragraph:
            "Complete the onboarding steps to receive personalized narrative guidance.".to_string(),
        bullets: vec![
            "Identify your defining word".to_string(),
            "Select your career value".to_string(),
            "Categorize your experiences".to_string(),
        ],
        experience_suggestions: vec![],
    }
}

/// Fills the template in one pass, so braces inside the student's own answers
/// are copied through untouched.
pub fn build_prompt(analysis: &AnalysisResult, onboarding: &OnboardingData) -> String {
    let distribution = format_distribution(analysis);
    let experiences = format_experiences(analysis);

    PLACEHOLDER_RE
        .replace_all(NARRATIVE_PROMPT_TEMPLATE, |caps: &Captures| {
            match &caps[1] {
                "word" => onboarding.word.clone(),
                "career_value" => onboarding.career_value.clone(),
                "paragraph" => onboarding.paragraph.clone(),
                "sentence" => onboarding.sentence.clone(),
                "distribution" => distribution.clone(),
                "top_category" => analysis.analytics.top_category.clone(),
                "experiences" => experiences.clone(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// One `- Label: N items (P%)` line per distribution entry.
fn format_distribution(analysis: &AnalysisResult) -> String {
    analysis
        .analytics
        .distribution
        .iter()
        .map(|d| {
            format!(
                "- {}: {} items ({:.1}%)",
                analysis.bin_label(&d.bin_id),
                d.count,
                d.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered bullet texts grouped under an uppercase heading per non-empty bin.
fn format_experiences(analysis: &AnalysisResult) -> String {
    let mut lines = Vec::new();
    for bin in analysis.bins.iter().filter(|b| !b.bullets.is_empty()) {
        lines.push(format!("\n=== {} ===", bin.label.to_uppercase()));
        for (i, bullet) in bin.bullets.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, excerpt(&bullet.text)));
        }
    }

    if lines.is_empty() {
        "No experiences categorized yet.".to_string()
    } else {
        lines.join("\n")
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXPERIENCE_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_EXPERIENCE_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::analysis::analytics::calculate_analytics;
    use crate::models::bin::default_bins;
    use crate::models::bullet::{BulletPoint, FormattingInfo};
    use crate::narrative::models::Alignment;

    /// Records the prompt it was given and replies with a canned body.
    struct Recorder {
        reply: String,
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatCompletion for Recorder {
        async fn complete(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn bullet(text: &str) -> BulletPoint {
        BulletPoint::new(text.to_string(), FormattingInfo::plain(text), 0)
    }

    fn analysis(with_onboarding: bool) -> AnalysisResult {
        let mut bins = default_bins();
        bins[0].bullets.push(bullet("Founded the campus robotics club"));
        bins[1].bullets.push(bullet("Built a Rust parser for course notes"));
        bins[1].bullets.push(bullet(&"x".repeat(320)));
        let analytics = calculate_analytics(&bins);
        AnalysisResult {
            bins,
            analytics,
            timestamp: Utc::now(),
            onboarding_data: with_onboarding.then(|| OnboardingData {
                paragraph: "I like bringing people together around hard problems.".to_string(),
                sentence: "A convener of builders.".to_string(),
                word: "Convener".to_string(),
                career_value: "Community".to_string(),
            }),
        }
    }

    #[test]
    fn test_prompt_contains_journey_and_experiences() {
        let a = analysis(true);
        let prompt = build_prompt(&a, a.onboarding_data.as_ref().unwrap());
        assert!(prompt.contains("DEFINING WORD: Convener"));
        assert!(prompt.contains("CAREER VALUE: Community"));
        assert!(prompt.contains("- Skill Set: 2 items (66.7%)"));
        assert!(prompt.contains("TOP CATEGORY: Skill Set"));
        assert!(prompt.contains("=== SKILL SET ==="));
        assert!(prompt.contains("1. Founded the campus robotics club"));
        assert!(prompt.contains(&format!("2. {}...", "x".repeat(300))));
        assert!(!prompt.contains("=== VALUES ==="));
        assert!(!prompt.contains("{word}"));
    }

    #[test]
    fn test_braces_in_answers_are_not_expanded() {
        let mut a = analysis(true);
        if let Some(onboarding) = a.onboarding_data.as_mut() {
            onboarding.paragraph = "I write {experiences} and {word} literally.".to_string();
        }
        let prompt = build_prompt(&a, a.onboarding_data.as_ref().unwrap());
        assert!(prompt.contains("SELF-DESCRIPTION: I write {experiences} and {word} literally."));
        assert_eq!(prompt.matches("=== SKILL SET ===").count(), 1);
    }

    #[test]
    fn test_experiences_placeholder_when_empty() {
        let mut a = analysis(true);
        for bin in &mut a.bins {
            bin.bullets.clear();
        }
        assert_eq!(format_experiences(&a), "No experiences categorized yet.");
    }

    #[tokio::test]
    async fn test_no_onboarding_returns_fallback_without_calling_backend() {
        let backend = Recorder::new("{}");
        let result = generate_narrative(&analysis(false), &backend).await.unwrap();
        assert_eq!(result.bullets.len(), 3);
        assert!(result.paragraph.contains("Complete the onboarding"));
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_parses_backend_reply() {
        let backend = Recorder::new(
            r#"```json
            {"paragraph": "A convener at heart.",
             "bullets": ["Lead with the club story"],
             "experienceSuggestions": [
                {"original": "Built a Rust parser for course notes", "category": "Skill Set",
                 "alignment": "moderate", "reframe": "Frame it as a tool for your study group.",
                 "explanation": "Shows convening through tools."}
             ]}
            ```"#,
        );
        let result = generate_narrative(&analysis(true), &backend).await.unwrap();
        assert_eq!(result.paragraph, "A convener at heart.");
        assert_eq!(result.experience_suggestions[0].alignment, Alignment::Moderate);
        assert_eq!(backend.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_surfaces_invalid_json() {
        let backend = Recorder::new("Sorry, I can't help with that.");
        let err = generate_narrative(&analysis(true), &backend).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
