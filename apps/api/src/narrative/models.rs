use serde::{Deserialize, Deserializer, Serialize};

/// How well an experience fits the student's defining word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Strong,
    #[default]
    Moderate,
    Weak,
}

impl Alignment {
    /// Case-insensitive; anything unrecognised reads as `Moderate`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "strong" => Alignment::Strong,
            "weak" => Alignment::Weak,
            _ => Alignment::Moderate,
        }
    }
}

// Model output is free text here; a stray label must not sink the whole reply.
impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map(Alignment::from_label).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceSuggestion {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub alignment: Alignment,
    /// Verbal reframing; `None` for strongly aligned experiences.
    #[serde(default)]
    pub reframe: Option<String>,
    #[serde(default)]
    pub explanation: String,
}

/// Narrative feedback returned to the client. Also the JSON shape the model
/// is asked to produce, so every field tolerates omission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeResponse {
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(rename = "experienceSuggestions", default)]
    pub experience_suggestions: Vec<ExperienceSuggestion>,
}
