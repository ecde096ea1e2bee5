//! DOCX bullet classification with run-level bold/italic projection.
//!
//! Unlike the plain-text path there is no continuation: every paragraph is
//! judged on its own, either by a textual marker or by Word's list metadata.

use crate::extraction::patterns::strip_bullet_prefix;
use crate::extraction::ExtractError;
use crate::models::bullet::{BulletPoint, FormattingInfo};

/// A text run with its character formatting. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxRun {
    pub text: String,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// The slice of a Word paragraph the classifier needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxParagraph {
    pub text: String,
    /// Paragraph carries native list numbering (`w:numPr`).
    pub has_numbering: bool,
    pub style_name: String,
    pub runs: Vec<DocxRun>,
}

/// Returns one bullet per qualifying paragraph, in document order.
pub fn classify_paragraphs(paragraphs: &[DocxParagraph]) -> Vec<BulletPoint> {
    paragraphs
        .iter()
        .enumerate()
        .filter(|(_, para)| is_bullet_paragraph(para))
        .map(|(idx, para)| {
            let (text, removed_prefix_len) = clean_bullet_text(&para.text);
            let clean_len = text.chars().count();
            let formatting = project_formatting(&para.runs, removed_prefix_len, clean_len);
            BulletPoint::new(text, formatting, idx)
        })
        .collect()
}

/// Textual marker, native numbering, or a list style all count.
pub fn is_bullet_paragraph(para: &DocxParagraph) -> bool {
    strip_bullet_prefix(&para.text).is_some() || para.has_numbering || para.style_name.contains("List")
}

/// Strips a leading marker and trims. Returns the cleaned text and the number
/// of characters the marker match covered (0 when there was no marker).
pub fn clean_bullet_text(text: &str) -> (String, usize) {
    match strip_bullet_prefix(text) {
        Some(marker) => (marker.rest.trim().to_string(), marker.prefix_chars),
        None => (text.trim().to_string(), 0),
    }
}

/// Expands run flags to one entry per character, drops the stripped marker
/// prefix, then pads with `false` or truncates to exactly `clean_len`.
///
/// Run text does not always tile the visible paragraph text, so a length
/// mismatch is repaired rather than reported.
pub fn project_formatting(
    runs: &[DocxRun],
    removed_prefix_len: usize,
    clean_len: usize,
) -> FormattingInfo {
    let mut bold = Vec::new();
    let mut italic = Vec::new();

    for run in runs {
        let n = run.text.chars().count();
        bold.extend(std::iter::repeat(run.bold.unwrap_or(false)).take(n));
        italic.extend(std::iter::repeat(run.italic.unwrap_or(false)).take(n));
    }

    FormattingInfo {
        bold: align(bold, removed_prefix_len, clean_len),
        italic: align(italic, removed_prefix_len, clean_len),
    }
}

fn align(flags: Vec<bool>, skip: usize, len: usize) -> Vec<bool> {
    flags
        .into_iter()
        .skip(skip)
        .chain(std::iter::repeat(false))
        .take(len)
        .collect()
}

/// Reads body paragraphs from a `.docx` archive held in memory.
///
/// Tables and other block-level children are skipped and do not consume a
/// paragraph index. Only a paragraph's direct runs are read; its text is the
/// concatenation of those runs.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<DocxParagraph>, ExtractError> {
    let docx = docx_rs::read_docx(bytes)?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(convert_paragraph(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

fn convert_paragraph(para: &docx_rs::Paragraph) -> DocxParagraph {
    let runs: Vec<DocxRun> = para
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::ParagraphChild::Run(run) => Some(convert_run(run)),
            _ => None,
        })
        .collect();

    DocxParagraph {
        text: runs.iter().map(|r| r.text.as_str()).collect(),
        has_numbering: para.property.numbering_property.is_some(),
        style_name: para
            .property
            .style
            .as_ref()
            .map(|s| s.val.clone())
            .unwrap_or_default(),
        runs,
    }
}

fn convert_run(run: &docx_rs::Run) -> DocxRun {
    let mut text = String::new();
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }

    // `<w:b w:val="0"/>` is kept as a disabled toggle, not dropped.
    let props = &run.run_property;
    DocxRun {
        text,
        bold: props.bold.as_ref().map(|b| *b == docx_rs::Bold::new()),
        italic: props.italic.as_ref().map(|i| *i == docx_rs::Italic::new()),
    }
}
