//! Deterministic post-processing applied to model output before validation.
//!
//! The generator itself is non-deterministic; these steps are the part of
//! the pipeline that can be pinned down and tested in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed neutral sentence used whenever the caller supplied no salary
/// information. Monetary figures are never fabricated.
pub const COMPENSATION_PLACEHOLDER: &str =
    "Compensation details are discussed during the hiring process.";

/// Removes duplicates (exact value) and sorts case-insensitively,
/// ascending. Original casing is preserved. Idempotent.
pub fn stabilize(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out: Vec<String> = values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect();
    out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    out
}

/// Title-cases a free-text field: first letter of each whitespace-separated
/// word uppercased, the rest lowercased. Empty input becomes "General".
pub fn title_case_or_general(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "General".to_string();
    }
    trimmed
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Matches numeric salary figures: a currency symbol or code next to
/// digits, shorthand like "120k", or a plain figure tied to a pay period.
static SALARY_FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[$€£]\s*\d|\b(usd|aud|eur|gbp)\b\s*\d|\b\d{2,3}\s*k\b|\b\d{4,6}\s*(per\s+(year|annum|month)|p\.?a\.?\b)",
    )
    .expect("salary pattern must compile")
});

pub fn contains_salary_figures(text: &str) -> bool {
    SALARY_FIGURE.is_match(text)
}

/// Enforces the no-fabricated-compensation rule on a benefits list.
///
/// When the caller supplied no salary, entries carrying numeric salary
/// figures are dropped and the neutral placeholder sentence is guaranteed
/// to be present. When a salary was supplied, the list passes through
/// untouched.
pub fn scrub_salary_figures(benefits: Vec<String>, salary_supplied: bool) -> Vec<String> {
    if salary_supplied {
        return benefits;
    }
    let mut scrubbed: Vec<String> = benefits
        .into_iter()
        .filter(|entry| !contains_salary_figures(entry))
        .collect();
    if !scrubbed.iter().any(|entry| entry == COMPENSATION_PLACEHOLDER) {
        scrubbed.push(COMPENSATION_PLACEHOLDER.to_string());
    }
    scrubbed
}
