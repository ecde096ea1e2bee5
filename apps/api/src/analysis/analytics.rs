use crate::models::analysis::{Analytics, Distribution};
use crate::models::bin::Bin;

const UNDERREPRESENTED_PCT: f64 = 15.0;
const DOMINANT_PCT: f64 = 40.0;
const MAX_SUGGESTIONS: usize = 5;

/// Computes distribution, top category and suggestions for categorized bins.
///
/// With no bullets at all the result has an empty distribution, top category
/// `"None"` and a single prompt to start categorizing.
pub fn calculate_analytics(bins: &[Bin]) -> Analytics {
    let total: usize = bins.iter().map(|b| b.bullets.len()).sum();

    if total == 0 {
        return Analytics {
            distribution: vec![],
            top_category: "None".to_string(),
            suggestions: vec!["Start categorizing your bullets to see insights!".to_string()],
        };
    }

    let distribution: Vec<Distribution> = bins
        .iter()
        .map(|bin| {
            let count = bin.bullets.len();
            Distribution {
                bin_id: bin.id.clone(),
                count,
                percentage: round_one_decimal(count as f64 / total as f64 * 100.0),
            }
        })
        .collect();

    // Ties go to the earliest bin; `max_by_key` keeps the last maximum, hence `rev`.
    let top_category = bins
        .iter()
        .rev()
        .max_by_key(|b| b.bullets.len())
        .map(|b| b.label.clone())
        .unwrap_or_else(|| "None".to_string());

    let suggestions = generate_suggestions(&distribution, bins);

    Analytics {
        distribution,
        top_category,
        suggestions,
    }
}

fn generate_suggestions(distribution: &[Distribution], bins: &[Bin]) -> Vec<String> {
    let mut suggestions = Vec::new();

    for (dist, bin) in distribution.iter().zip(bins) {
        let label = &bin.label;
        if dist.percentage < UNDERREPRESENTED_PCT && dist.count > 0 {
            suggestions.push(format!(
                "Consider adding more bullets to '{label}' to provide a fuller picture"
            ));
        } else if dist.percentage > DOMINANT_PCT {
            suggestions.push(format!(
                "Strong emphasis on '{label}' - this is a key part of your profile!"
            ));
        } else if dist.count == 0 {
            suggestions.push(format!(
                "No bullets in '{label}' - reflect on experiences that fit this category"
            ));
        }
    }

    if distribution.iter().all(|d| d.count > 0) {
        suggestions.push("Well-balanced profile across all categories!".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Halves go to the even neighbour: 6.25 becomes 6.2.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bullet::{BulletPoint, FormattingInfo};

    fn bins_with_counts(counts: &[(&str, usize)]) -> Vec<Bin> {
        counts
            .iter()
            .map(|(id, count)| Bin {
                id: id.to_string(),
                label: title_case(id),
                color: "#000".to_string(),
                bullets: (0..*count)
                    .map(|i| {
                        let text = format!("Bullet {i}");
                        let formatting = FormattingInfo::plain(&text);
                        BulletPoint::new(text, formatting, 0)
                    })
                    .collect(),
            })
            .collect()
    }

    fn title_case(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[test]
    fn test_empty_bins() {
        let bins = bins_with_counts(&[("interests", 0), ("skillset", 0), ("values", 0), ("strengths", 0)]);
        let result = calculate_analytics(&bins);
        assert_eq!(result.top_category, "None");
        assert!(result.distribution.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].to_lowercase().contains("categorizing"));
    }

    #[test]
    fn test_distribution_calculation() {
        let bins = bins_with_counts(&[("interests", 5), ("skillset", 3), ("values", 1), ("strengths", 1)]);
        let result = calculate_analytics(&bins);
        assert_eq!(result.distribution.len(), 4);
        let interests = result.distribution.iter().find(|d| d.bin_id == "interests").unwrap();
        assert_eq!(interests.count, 5);
        assert_eq!(interests.percentage, 50.0);
    }

    #[test]
    fn test_percentage_halves_round_to_even() {
        let bins = bins_with_counts(&[("interests", 1), ("skillset", 15)]);
        let result = calculate_analytics(&bins);
        assert_eq!(result.distribution[0].percentage, 6.2);
        assert_eq!(result.distribution[1].percentage, 93.8);
    }

    #[test]
    fn test_percentages_round_to_one_decimal() {
        let bins = bins_with_counts(&[("interests", 1), ("skillset", 2)]);
        let result = calculate_analytics(&bins);
        assert_eq!(result.distribution[0].percentage, 33.3);
        assert_eq!(result.distribution[1].percentage, 66.7);
    }

    #[test]
    fn test_top_category() {
        let bins = bins_with_counts(&[("interests", 2), ("skillset", 5), ("values", 1), ("strengths", 2)]);
        assert_eq!(calculate_analytics(&bins).top_category, "Skillset");
    }

    #[test]
    fn test_top_category_tie_goes_to_first_bin() {
        let bins = bins_with_counts(&[("interests", 3), ("skillset", 3)]);
        assert_eq!(calculate_analytics(&bins).top_category, "Interests");
    }

    #[test]
    fn test_suggestion_for_underrepresented() {
        let bins = bins_with_counts(&[("interests", 10), ("skillset", 1), ("values", 0), ("strengths", 0)]);
        let result = calculate_analytics(&bins);
        assert!(result.suggestions.iter().any(|s| s.contains("Skillset") && s.contains("fuller picture")));
    }

    #[test]
    fn test_suggestion_for_dominant() {
        let bins = bins_with_counts(&[("interests", 8), ("skillset", 1), ("values", 1), ("strengths", 0)]);
        let result = calculate_analytics(&bins);
        assert!(result.suggestions.iter().any(|s| s.contains("Interests") && s.contains("Strong")));
    }

    #[test]
    fn test_suggestion_for_empty_category() {
        let bins = bins_with_counts(&[("interests", 5), ("skillset", 5), ("values", 0), ("strengths", 0)]);
        let result = calculate_analytics(&bins);
        let empty = result.suggestions.iter().filter(|s| s.contains("No bullets")).count();
        assert!(empty >= 2);
    }

    #[test]
    fn test_balanced_profile_suggestion() {
        let bins = bins_with_counts(&[("interests", 3), ("skillset", 3), ("values", 2), ("strengths", 2)]);
        let result = calculate_analytics(&bins);
        assert!(result.suggestions.iter().any(|s| s.to_lowercase().contains("balanced")));
    }

    #[test]
    fn test_max_suggestions() {
        let bins = bins_with_counts(&[
            ("a", 1),
            ("b", 1),
            ("c", 1),
            ("d", 1),
            ("e", 1),
            ("f", 1),
            ("g", 1),
            ("h", 1),
        ]);
        let result = calculate_analytics(&bins);
        // Eight bins at 12.5% each would each earn a suggestion.
        assert_eq!(result.suggestions.len(), 5);
    }
}
