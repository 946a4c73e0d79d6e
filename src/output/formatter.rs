use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::property::Property;
use crate::scoring::{format_grouped, Criterion, Evaluation, Weights};

/// A property paired with its evaluation, ready for display.
pub struct ScoredProperty<'a> {
    pub property: &'a Property,
    pub evaluation: &'a Evaluation,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a price in kr with Norwegian digit grouping
pub fn format_price(price: f64) -> String {
    format!("{} kr", format_grouped(price.round() as i64))
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate an address to fit available width, accounting for Unicode
fn truncate_address(address: &str, max_width: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= max_width {
        address.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format properties as a ranked table: index, total score, address, price,
/// area, type. No headers.
/// Index column: 3 chars (fits "99."), right-aligned.
/// Score column: 3 chars, right-aligned (totals are 0-100).
pub fn format_scored_table(properties: &[ScoredProperty], use_colors: bool) -> String {
    if properties.is_empty() {
        return "No properties in catalog.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 3;
    let separator = "  ";

    properties
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", scored.evaluation.total_score, width = score_width);

            let price = format_price(scored.property.price);
            let suffix = format!(
                "{}{}{}{} m²{}{}",
                separator,
                price,
                separator,
                scored.property.area,
                separator,
                scored.property.property_type
            );

            let fixed_width = index_width + 1 + score_width + separator.len() + suffix.chars().count();
            let address = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_address(&scored.property.address, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_address(&scored.property.address, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.property.address.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    address,
                    suffix
                )
            } else {
                format!("{} {}{}{}{}", index_str, score_str, separator, address, suffix)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one property with its full per-criterion breakdown.
/// Criteria are listed in the fixed definition order with label, weight,
/// score, and the scorer's explanation of the raw input.
pub fn format_property_detail(
    property: &Property,
    evaluation: &Evaluation,
    weights: &Weights,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("{}", property.address.bold()));
    } else {
        lines.push(property.address.clone());
    }
    lines.push(format!(
        "  {} | {} | {} m² | Byggeår: {}",
        property.property_type,
        format_price(property.price),
        property.area,
        property.year_built
    ));
    if let Some(link) = &property.listing_link {
        lines.push(format!("  {}", link));
    }
    if let Some(comment) = &property.user_comment {
        lines.push(format!("  \"{}\"", comment));
    }

    let total = format!("  Total score: {}/100", evaluation.total_score);
    if use_colors {
        lines.push(format!("{}", total.bold()));
    } else {
        lines.push(total);
    }
    lines.push(String::new());

    for criterion in Criterion::ALL {
        let definition = criterion.definition();
        let weight = weights.get(criterion);
        let score = &evaluation.scores[&criterion];
        let line = format!(
            "  {:<28} {:>3}  {:>5.1}  {}",
            definition.label, weight, score.score, score.description
        );
        if use_colors && weight == 0 {
            lines.push(format!("{}", line.dimmed()));
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format the weight table for the `weights` command:
/// id, current value, suggested max (if any), label.
pub fn format_weights_table(weights: &Weights) -> String {
    Criterion::ALL
        .iter()
        .map(|&criterion| {
            let definition = criterion.definition();
            let max = definition
                .max_weight
                .map(|m| format!("(max {})", m))
                .unwrap_or_default();
            format!(
                "{:<26} {:>3} {:<9} {}",
                criterion.id(),
                weights.get(criterion),
                max,
                definition.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format properties as tab-separated values for scripting
/// Columns: total score, address, price, area, id (no headers, no colors)
pub fn format_tsv(properties: &[ScoredProperty]) -> String {
    if properties.is_empty() {
        return String::new();
    }

    properties
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                scored.evaluation.total_score,
                scored.property.address,
                scored.property.price.round() as i64,
                scored.property.area,
                scored.property.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{evaluate_at, Thresholds};

    fn sample_property() -> Property {
        Property {
            address: "Granveien 12".to_string(),
            price: 4_500_000.0,
            area: 95.0,
            bedrooms: 3,
            bathrooms: 1.5,
            ..Property::default()
        }
    }

    fn sample_evaluation(property: &Property) -> Evaluation {
        evaluate_at(property, &Weights::default(), &Thresholds::default(), 2026)
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4_500_000.0), "4 500 000 kr");
        assert_eq!(format_price(0.0), "0 kr");
        assert_eq!(format_price(999.6), "1 000 kr");
    }

    #[test]
    fn test_truncate_address_short() {
        assert_eq!(truncate_address("Granveien 12", 20), "Granveien 12");
    }

    #[test]
    fn test_truncate_address_long() {
        assert_eq!(
            truncate_address("En veldig lang adresse i en liten by", 15),
            "En veldig la..."
        );
    }

    #[test]
    fn test_truncate_address_unicode() {
        // Truncation counts chars, not bytes
        assert_eq!(truncate_address("Bjørnstjerne Bjørnsons gate 1", 12), "Bjørnstje...");
    }

    #[test]
    fn test_format_scored_table_empty() {
        let properties: Vec<ScoredProperty> = vec![];
        assert_eq!(format_scored_table(&properties, false), "No properties in catalog.");
    }

    #[test]
    fn test_format_scored_table_single() {
        let property = sample_property();
        let evaluation = sample_evaluation(&property);
        let scored = vec![ScoredProperty {
            property: &property,
            evaluation: &evaluation,
        }];
        let result = format_scored_table(&scored, false);
        assert!(result.contains(" 1."));
        assert!(result.contains("Granveien 12"));
        assert!(result.contains("4 500 000 kr"));
        assert!(result.contains("95 m²"));
    }

    #[test]
    fn test_format_scored_table_indices_sequential() {
        let first = sample_property();
        let mut second = sample_property();
        second.address = "Lia 3".to_string();
        let eval_first = sample_evaluation(&first);
        let eval_second = sample_evaluation(&second);
        let scored = vec![
            ScoredProperty { property: &first, evaluation: &eval_first },
            ScoredProperty { property: &second, evaluation: &eval_second },
        ];
        let result = format_scored_table(&scored, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 1."));
        assert!(lines[1].contains(" 2."));
    }

    #[test]
    fn test_format_property_detail_lists_every_criterion() {
        let property = sample_property();
        let evaluation = sample_evaluation(&property);
        let result =
            format_property_detail(&property, &evaluation, &Weights::default(), false);
        for criterion in Criterion::ALL {
            assert!(
                result.contains(criterion.definition().label),
                "missing label for {}",
                criterion
            );
        }
        assert!(result.contains("Total score:"));
    }

    #[test]
    fn test_format_property_detail_shows_descriptions() {
        let property = sample_property();
        let evaluation = sample_evaluation(&property);
        let result =
            format_property_detail(&property, &evaluation, &Weights::default(), false);
        assert!(result.contains("3 soverom"));
        assert!(result.contains("1.5 bad"));
    }

    #[test]
    fn test_format_weights_table_lists_all_ids() {
        let result = format_weights_table(&Weights::default());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), Criterion::COUNT);
        assert!(result.contains("price_per_sqm"));
        assert!(result.contains("(max 20)"));
    }

    #[test]
    fn test_format_tsv_empty() {
        let properties: Vec<ScoredProperty> = vec![];
        assert_eq!(format_tsv(&properties), "");
    }

    #[test]
    fn test_format_tsv_columns() {
        let property = sample_property();
        let evaluation = sample_evaluation(&property);
        let scored = vec![ScoredProperty {
            property: &property,
            evaluation: &evaluation,
        }];
        let result = format_tsv(&scored);
        assert_eq!(result.split('\t').count(), 5);
        assert!(result.contains("Granveien 12"));
        assert!(result.contains("4500000"));
    }
}
