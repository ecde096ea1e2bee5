use serde::{Deserialize, Serialize};

use crate::models::bullet::BulletPoint;

/// A user-assigned category that bullets are sorted into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bin {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub bullets: Vec<BulletPoint>,
}

/// (id, label, color) of the bins the workshop starts with.
pub const DEFAULT_BINS: &[(&str, &str, &str)] = &[
    ("interests", "Interests", "#267ABA"),
    ("skillset", "Skill Set", "#00693E"),
    ("values", "Values", "#8A6996"),
    ("strengths", "Strengths", "#643C20"),
];

pub fn default_bins() -> Vec<Bin> {
    DEFAULT_BINS
        .iter()
        .map(|(id, label, color)| Bin {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            bullets: Vec::new(),
        })
        .collect()
}
