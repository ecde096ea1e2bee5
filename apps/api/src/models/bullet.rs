use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Character-level bold/italic markers, one entry per `char` of the text they
/// were built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingInfo {
    pub bold: Vec<bool>,
    pub italic: Vec<bool>,
}

impl FormattingInfo {
    /// Uniform formatting for `text`: nothing bold, nothing italic.
    pub fn plain(text: &str) -> Self {
        let len = text.chars().count();
        Self {
            bold: vec![false; len],
            italic: vec![false; len],
        }
    }
}

/// One extracted resume line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletPoint {
    pub id: String,
    pub text: String,
    pub formatting: FormattingInfo,
    /// Line (PDF) or paragraph (DOCX) index where the bullet began.
    pub original_index: usize,
}

impl BulletPoint {
    /// Builds a bullet with a fresh id. `formatting` must already be aligned to `text`.
    pub fn new(text: String, formatting: FormattingInfo, original_index: usize) -> Self {
        let bullet = Self {
            id: Uuid::new_v4().to_string(),
            text,
            formatting,
            original_index,
        };
        debug_assert!(bullet.is_aligned(), "formatting not aligned to {:?}", bullet.text);
        bullet
    }

    /// True when the formatting spans cover `text` exactly.
    pub fn is_aligned(&self) -> bool {
        let len = self.text.chars().count();
        self.formatting.bold.len() == len && self.formatting.italic.len() == len
    }
}
