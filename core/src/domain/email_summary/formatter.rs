use crate::domain::skincare_analysis::entities::{AnalysisResult, ProductAnalysis};

const NOT_SPECIFIED: &str = "Not specified";

/// Render an analysis as the plain-text body of a summary email.
///
/// Routine sections are always present, possibly without items. The
/// conflicts section only appears when at least one conflict was found.
pub fn format_summary(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = vec![
        "Here is your skincare routine analysis.".to_string(),
        String::new(),
        "Products:".to_string(),
    ];

    for product in &result.products {
        lines.extend(product_lines(product));
    }

    lines.push(String::new());
    lines.push("AM Routine:".to_string());
    lines.extend(numbered(&result.recommended_routine.am));

    lines.push(String::new());
    lines.push("PM Routine:".to_string());
    lines.extend(numbered(&result.recommended_routine.pm));

    if !result.conflicts.is_empty() {
        lines.push(String::new());
        lines.push("Conflicts:".to_string());
        for conflict in &result.conflicts {
            lines.push(format!(
                "- {}: {}",
                conflict.products.join(" & "),
                conflict.reason
            ));
        }
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}

fn product_lines(product: &ProductAnalysis) -> Vec<String> {
    let usage_time = if product.usage_time.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        product.usage_time.join(", ")
    };

    vec![
        format!("- {}", product.name),
        format!("  Description: {}", or_not_specified(&product.description)),
        format!("  Usage Time: {}", usage_time),
        format!("  Frequency: {}", or_not_specified(&product.frequency)),
    ]
}

fn numbered(steps: &[String]) -> impl Iterator<Item = String> + '_ {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {}", index + 1, step))
}

fn or_not_specified(text: &str) -> &str {
    if text.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        text
    }
}
