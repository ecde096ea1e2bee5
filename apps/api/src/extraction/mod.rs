//! Resume bullet extraction: turns PDF text or DOCX paragraphs into
//! `BulletPoint`s with per-character formatting.
//!
//! Parsing is synchronous and CPU-bound; async callers run it inside
//! `tokio::task::spawn_blocking`.

pub mod docx;
pub mod handlers;
pub mod patterns;
pub mod pdf;
pub mod text;

use thiserror::Error;
use tracing::info;

use crate::models::bullet::BulletPoint;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX read failed: {0}")]
    Docx(#[from] docx_rs::ReaderError),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Picks the kind from a file name's extension, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Parses a whole uploaded document. Empty or bullet-free documents yield an
/// empty vector, not an error.
pub fn parse_resume(kind: DocumentKind, bytes: &[u8]) -> Result<Vec<BulletPoint>, ExtractError> {
    let bullets = match kind {
        DocumentKind::Pdf => pdf::parse_pdf(bytes)?,
        DocumentKind::Docx => {
            let paragraphs = docx::read_paragraphs(bytes)?;
            docx::classify_paragraphs(&paragraphs)
        }
    };
    info!("Extracted {} bullets from {:?} upload", bullets.len(), kind);
    Ok(bullets)
}
