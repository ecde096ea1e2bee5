use tracing::debug;

use crate::extraction::text::extract_bullets_from_text;
use crate::extraction::ExtractError;
use crate::models::bullet::BulletPoint;

/// Extracts per-page text from an in-memory PDF. Pages with no text are kept
/// as empty strings so page count stays visible to callers.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    debug!("Extracted text from {} PDF pages", pages.len());
    Ok(pages)
}

/// Joins pages with a newline so a bullet never runs across a page break
/// without a line boundary.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut all_text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        all_text.push_str(page);
        all_text.push('\n');
    }
    all_text
}

pub fn parse_pdf(bytes: &[u8]) -> Result<Vec<BulletPoint>, ExtractError> {
    let pages = extract_pages(bytes)?;
    Ok(extract_bullets_from_text(&join_pages(&pages)))
}
