//! Export documents built from a finished `AnalysisResult`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::export::spans::merge_formatting_spans;
use crate::models::analysis::{AnalysisResult, Analytics};
use crate::models::bin::Bin;

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    student_analysis: StudentAnalysis<'a>,
}

#[derive(Debug, Serialize)]
struct StudentAnalysis<'a> {
    timestamp: String,
    bins: &'a [Bin],
    analytics: &'a Analytics,
}

/// Pretty-printed `{"student_analysis": {timestamp, bins, analytics}}`.
/// Onboarding answers are not part of the export.
pub fn export_to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonExport {
        student_analysis: StudentAnalysis {
            timestamp: result.timestamp.to_rfc3339(),
            bins: &result.bins,
            analytics: &result.analytics,
        },
    })
}

/// Standalone HTML page: distribution table, bullets per bin with their
/// bold/italic spans, then suggestions.
pub fn export_to_html(result: &AnalysisResult) -> String {
    let mut html = String::new();
    let date = result.timestamp.format("%B %d, %Y");

    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>Career Design Analysis - {date}</title></head>\n<body>\n"));
    html.push_str(&format!("<h1>Career Design Analysis - {date}</h1>\n"));

    html.push_str("<h2>Distribution Overview</h2>\n<table>\n");
    html.push_str("<tr><th>Category</th><th>Count</th><th>Percentage</th></tr>\n");
    for dist in &result.analytics.distribution {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>\n",
            encode_text(result.bin_label(&dist.bin_id)),
            dist.count,
            dist.percentage
        ));
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Categorized Bullets</h2>\n");
    for bin in result.bins.iter().filter(|b| !b.bullets.is_empty()) {
        html.push_str(&format!(
            "<h3><span style=\"color: {}\">{}</span> ({} bullets)</h3>\n<ul>\n",
            encode_double_quoted_attribute(&bin.color),
            encode_text(&bin.label),
            bin.bullets.len()
        ));
        for bullet in &bin.bullets {
            html.push_str(&format!(
                "<li>{}</li>\n",
                merge_formatting_spans(&bullet.text, &bullet.formatting)
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("<h2>Insights &amp; Suggestions</h2>\n<ul>\n");
    for suggestion in &result.analytics.suggestions {
        html.push_str(&format!("<li>{}</li>\n", encode_text(suggestion)));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}
