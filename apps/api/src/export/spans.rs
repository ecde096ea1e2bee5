use crate::models::bullet::FormattingInfo;

/// Renders `text` with `<b>`/`<i>` tags wherever the per-character flags
/// switch on or off. Text is HTML-escaped; missing flags count as `false`.
pub fn merge_formatting_spans(text: &str, formatting: &FormattingInfo) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segment = String::new();
    let mut in_bold = false;
    let mut in_italic = false;

    for (i, ch) in text.chars().enumerate() {
        let bold = formatting.bold.get(i).copied().unwrap_or(false);
        let italic = formatting.italic.get(i).copied().unwrap_or(false);

        if bold != in_bold || italic != in_italic {
            flush(&mut out, &mut segment);
        }
        if bold != in_bold {
            out.push_str(if bold { "<b>" } else { "</b>" });
            in_bold = bold;
        }
        if italic != in_italic {
            out.push_str(if italic { "<i>" } else { "</i>" });
            in_italic = italic;
        }
        segment.push(ch);
    }
    flush(&mut out, &mut segment);

    if in_italic {
        out.push_str("</i>");
    }
    if in_bold {
        out.push_str("</b>");
    }
    out
}

fn flush(out: &mut String, segment: &mut String) {
    out.push_str(&html_escape::encode_text(segment));
    segment.clear();
}
