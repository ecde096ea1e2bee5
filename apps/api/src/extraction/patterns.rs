//! Bullet-marker and section-header predicates shared by both extraction modes.
//!
//! All matching is anchored at the start of the line: a `•` or `-` in the
//! middle of a sentence never makes it a bullet.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker followed by at least one whitespace character (text may follow).
// U+F0B7 is the private-use glyph Word emits for Symbol/Wingdings bullets.
static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[•●▪○\-–*\u{F0B7}]|\d+\.)\s+").expect("bullet prefix pattern is valid")
});

/// A glyph marker standing alone on its line.
static BULLET_ONLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[•●▪○\u{F0B7}]\s*$").expect("bullet-only pattern is valid")
});

const HEADER_UPPERCASE_RATIO: f64 = 0.8;
const HEADER_MAX_CAPS_LEN: usize = 50;
const HEADER_MAX_COLON_LEN: usize = 60;

/// Result of stripping a leading bullet marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    /// Everything after the marker and its trailing whitespace.
    pub rest: &'a str,
    /// Characters removed: leading whitespace, marker, trailing whitespace.
    pub prefix_chars: usize,
}

/// Strips a "marker + whitespace" prefix, if the line starts with one.
pub fn strip_bullet_prefix(line: &str) -> Option<MarkerMatch<'_>> {
    BULLET_PREFIX_RE.find(line).map(|m| MarkerMatch {
        rest: &line[m.end()..],
        prefix_chars: m.as_str().chars().count(),
    })
}

pub fn starts_bullet(line: &str) -> bool {
    BULLET_PREFIX_RE.is_match(line)
}

pub fn is_marker_only(line: &str) -> bool {
    BULLET_ONLY_RE.is_match(line)
}

/// Either bullet form. Continuation stops at these lines.
pub fn is_bullet_start(line: &str) -> bool {
    starts_bullet(line) || is_marker_only(line)
}

/// Heuristic for section headers such as `EDUCATION` or `Skills:`.
///
/// True when the trimmed line is
/// - mostly uppercase (> 80% of its letters) and at most 50 chars, or
/// - ends with `:` and is at most 60 chars.
///
/// Blank lines are never headers.
pub fn looks_like_header(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return false;
    }
    let len = s.chars().count();

    let (letters, upper) = s
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(letters, upper), c| {
            (letters + 1, upper + usize::from(c.is_uppercase()))
        });
    if letters > 0
        && (upper as f64 / letters as f64) > HEADER_UPPERCASE_RATIO
        && len <= HEADER_MAX_CAPS_LEN
    {
        return true;
    }

    s.ends_with(':') && len <= HEADER_MAX_COLON_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_markers_start_bullets() {
        assert!(starts_bullet("• Built ML pipeline"));
        assert!(starts_bullet("  • Led team of engineers"));
        assert!(starts_bullet("● Shipped v2"));
        assert!(starts_bullet("▪ Mentored interns"));
        assert!(starts_bullet("○ Nested point"));
        assert!(starts_bullet("\u{F0B7}\tWingdings bullet"));
    }

    #[test]
    fn test_dash_and_asterisk_markers() {
        assert!(starts_bullet("- Developed API endpoints"));
        assert!(starts_bullet("  - Managed project timeline"));
        assert!(starts_bullet("– En dash item"));
        assert!(starts_bullet("* Created database schema"));
    }

    #[test]
    fn test_numbered_markers() {
        assert!(starts_bullet("1. First achievement"));
        assert!(starts_bullet("10. Tenth item"));
        assert!(!starts_bullet("1.5 million users"));
    }

    #[test]
    fn test_marker_requires_following_whitespace() {
        assert!(!starts_bullet("-5% churn"));
        assert!(!starts_bullet("•NoSpace"));
    }

    #[test]
    fn test_non_bullet_text() {
        assert!(!starts_bullet("Education"));
        assert!(!starts_bullet("Work Experience"));
        assert!(!starts_bullet("Worked on • mid-line glyph"));
    }

    #[test]
    fn test_marker_only_lines() {
        assert!(is_marker_only("•"));
        assert!(is_marker_only("   ●   "));
        assert!(is_marker_only("\u{F0B7}"));
        assert!(!is_marker_only("-"));
        assert!(!is_marker_only("• text"));
    }

    #[test]
    fn test_strip_prefix_reports_char_count() {
        let m = strip_bullet_prefix("  •  Led team").unwrap();
        assert_eq!(m.rest, "Led team");
        // Two spaces, the glyph (3 bytes in UTF-8), two spaces.
        assert_eq!(m.prefix_chars, 5);

        let m = strip_bullet_prefix("12. Item").unwrap();
        assert_eq!(m.rest, "Item");
        assert_eq!(m.prefix_chars, 4);

        assert!(strip_bullet_prefix("Plain prose").is_none());
    }

    #[test]
    fn test_header_detection() {
        assert!(looks_like_header("EDUCATION"));
        assert!(looks_like_header("WORK EXPERIENCE"));
        assert!(looks_like_header("Skills:"));
        assert!(looks_like_header("  Relevant Coursework:  "));
        assert!(!looks_like_header("Built a machine learning pipeline"));
    }

    #[test]
    fn test_header_length_limits() {
        let long_caps = "A".repeat(51);
        assert!(!looks_like_header(&long_caps));
        assert!(looks_like_header(&"A".repeat(50)));

        let long_colon = format!("{}:", "a".repeat(60));
        assert!(!looks_like_header(&long_colon));
    }

    #[test]
    fn test_header_ignores_blank_and_letterless_lines() {
        assert!(!looks_like_header(""));
        assert!(!looks_like_header("    "));
        assert!(!looks_like_header("2019 - 2023"));
        assert!(looks_like_header("2019:"));
    }

    #[test]
    fn test_header_counts_only_letters_for_ratio() {
        // 4 of 5 letters uppercase is exactly 0.8, not above it.
        assert!(!looks_like_header("ABCDe"));
        assert!(looks_like_header("GPA 3.9 / AWARDS"));
    }
}
