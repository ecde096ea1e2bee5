//! Plain-text bullet segmentation for text pulled out of PDFs.
//!
//! Lines are scanned once, left to right. A bullet starts at a marker line and
//! absorbs following lines until a blank line, another marker, or something
//! that looks like a section header. Lines outside any bullet are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::patterns::{
    is_bullet_start, is_marker_only, looks_like_header, strip_bullet_prefix,
};
use crate::models::bullet::{BulletPoint, FormattingInfo};

/// Every line boundary PDF text may carry, including form feeds between
/// pages and bare carriage returns.
static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

/// Splits `text` into right-trimmed lines and segments them.
pub fn extract_bullets_from_text(text: &str) -> Vec<BulletPoint> {
    let lines: Vec<&str> = LINE_BREAK_RE.split(text).map(str::trim_end).collect();
    segment_lines(&lines)
}

/// Segments already-split lines. `original_index` refers to positions in `lines`.
pub fn segment_lines(lines: &[&str]) -> Vec<BulletPoint> {
    let mut bullets = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].trim();
        if line.is_empty() {
            cursor += 1;
            continue;
        }

        let start_index = cursor;
        let mut fragments: Vec<&str> = Vec::new();

        if let Some(marker) = strip_bullet_prefix(line) {
            let first = marker.rest.trim();
            if !first.is_empty() {
                fragments.push(first);
            }
        } else if !is_marker_only(line) {
            // Prose, headers, page furniture.
            cursor += 1;
            continue;
        }
        cursor += 1;

        cursor = collect_continuation(lines, cursor, &mut fragments);

        let text = fragments.join(" ").trim().to_string();
        if text.is_empty() {
            continue;
        }
        let formatting = FormattingInfo::plain(&text);
        bullets.push(BulletPoint::new(text, formatting, start_index));
    }

    bullets
}

/// Appends continuation lines starting at `cursor` and returns where scanning
/// resumes. A terminating blank line is consumed; a terminating marker or
/// header line is left for the caller.
fn collect_continuation<'a>(lines: &[&'a str], mut cursor: usize, out: &mut Vec<&'a str>) -> usize {
    while cursor < lines.len() {
        let next = lines[cursor].trim();
        if next.is_empty() {
            return cursor + 1;
        }
        if is_bullet_start(next) || looks_like_header(next) {
            return cursor;
        }
        out.push(next);
        cursor += 1;
    }
    cursor
}
