//! Pull physical quantities ("12.5 gal", "450 kWh", "320 miles") out of
//! free-text transaction descriptions.
//!
//! The `gal` and `mi` abbreviations require a trailing word boundary, a
//! deliberate tightening over the reference patterns so "5 min" and
//! digit-adjacent words like "galaxy" do not read as quantities.

use std::sync::LazyLock;

use carbon_core::Quantity;
use regex::Regex;

/// Recognized unit families, in match-priority order. Each entry is
/// (pattern, normalized unit); the first pattern that matches wins.
static UNIT_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(gal|gallon|gallons)\b").unwrap(),
            "gallon",
        ),
        (
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kwh|kilowatt)").unwrap(),
            "kWh",
        ),
        (
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mi|mile|miles)\b").unwrap(),
            "mile",
        ),
    ]
});

/// Scan a description for an embedded physical quantity.
///
/// Returns the parsed value with its normalized unit ("gallon", "kWh",
/// "mile"), or `None` when the text carries no recognizable quantity —
/// not an error, just the signal to fall back to spend-based estimation.
pub fn extract_quantity(description: &str) -> Option<Quantity> {
    for (pattern, unit) in UNIT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(description) {
            let value: f64 = caps[1].parse().ok()?;
            return Some(Quantity {
                value,
                unit: (*unit).to_string(),
            });
        }
    }
    None
}
