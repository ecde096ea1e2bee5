use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::bin::Bin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub bin_id: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub distribution: Vec<Distribution>,
    pub top_category: String,
    pub suggestions: Vec<String>,
}

/// Answers from the onboarding steps the student completes before sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingData {
    pub paragraph: String,
    pub sentence: String,
    pub word: String,
    #[serde(rename = "careerValue")]
    pub career_value: String,
}

/// Everything the client sends back once bullets are categorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub bins: Vec<Bin>,
    pub analytics: Analytics,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "onboardingData", default)]
    pub onboarding_data: Option<OnboardingData>,
}

impl AnalysisResult {
    /// Label for a bin id, falling back to the id itself.
    pub fn bin_label<'a>(&'a self, bin_id: &'a str) -> &'a str {
        self.bins
            .iter()
            .find(|b| b.id == bin_id)
            .map(|b| b.label.as_str())
            .unwrap_or(bin_id)
    }
}
