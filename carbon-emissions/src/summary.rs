//! Aggregate per-transaction estimates into category and monthly rollups.

use std::collections::{BTreeMap, HashMap};

use carbon_core::{EmissionEstimateResult, Transaction};
use serde::Serialize;

use crate::classify::DEFAULT_CATEGORY;

/// One category's share of a set of estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    /// Total kg CO2e attributed to this category
    pub total_kg: f64,
    /// Share of the overall footprint, 0-100
    pub percentage: f64,
    /// Number of transactions
    pub count: usize,
}

/// Group estimates by transaction category, sorted by descending total.
///
/// Grouping uses the transaction's classified category (not the resolved
/// factor key), so activity results for "transport.fuel.gasoline" still
/// roll up under "transport.fuel". `txns` and `estimates` are parallel
/// slices as produced by `estimate_batch`.
pub fn summarize(txns: &[Transaction], estimates: &[EmissionEstimateResult]) -> Vec<CategoryStats> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for (txn, estimate) in txns.iter().zip(estimates) {
        let category = txn.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        let entry = totals.entry(category).or_insert((0.0, 0));
        entry.0 += estimate.kg_co2e;
        entry.1 += 1;
    }

    let grand_total: f64 = totals.values().map(|(kg, _)| kg).sum();

    let mut stats: Vec<CategoryStats> = totals
        .into_iter()
        .map(|(category, (total_kg, count))| CategoryStats {
            category: category.to_string(),
            total_kg,
            percentage: if grand_total > 0.0 {
                total_kg / grand_total * 100.0
            } else {
                0.0
            },
            count,
        })
        .collect();

    // Descending by total; category name tiebreak keeps output stable.
    stats.sort_by(|a, b| {
        b.total_kg
            .partial_cmp(&a.total_kg)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    stats
}

/// Total kg CO2e per "YYYY-MM" month, in chronological order.
pub fn monthly_totals(
    txns: &[Transaction],
    estimates: &[EmissionEstimateResult],
) -> Vec<(String, f64)> {
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for (txn, estimate) in txns.iter().zip(estimates) {
        *months.entry(txn.month_key()).or_insert(0.0) += estimate.kg_co2e;
    }
    months.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_batch;
    use chrono::NaiveDate;

    fn txn(date: (i32, u32, u32), description: &str, amount_usd: f64, category: &str) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount_usd,
            mcc: None,
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_summarize_groups_and_sorts() {
        let txns = vec![
            txn((2026, 2, 1), "Shell Gas Station", 100.0, "transport.fuel"), // 52 kg
            txn((2026, 2, 3), "Safeway", 40.0, "grocery"),                   // 14 kg
            txn((2026, 2, 5), "Chevron", 50.0, "transport.fuel"),            // 26 kg
        ];
        let estimates = estimate_batch(&txns);
        let stats = summarize(&txns, &estimates);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "transport.fuel");
        assert!((stats[0].total_kg - 78.0).abs() < 1e-9);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].category, "grocery");
        assert!((stats[0].percentage + stats[1].percentage - 100.0).abs() < 1e-9);
        assert!((stats[0].percentage - 78.0 / 92.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_results_roll_up_under_parent_category() {
        let txns = vec![txn(
            (2026, 2, 1),
            "Shell Gas Station - 12.5 gal",
            45.32,
            "transport.fuel",
        )];
        let estimates = estimate_batch(&txns);
        assert_eq!(estimates[0].details.category_key, "transport.fuel.gasoline");

        let stats = summarize(&txns, &estimates);
        assert_eq!(stats[0].category, "transport.fuel");
        assert!((stats[0].total_kg - 111.125).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(summarize(&[], &[]).is_empty());
        assert!(monthly_totals(&[], &[]).is_empty());
    }

    #[test]
    fn test_monthly_totals_in_date_order() {
        let txns = vec![
            txn((2026, 3, 2), "Safeway", 40.0, "grocery"),
            txn((2026, 1, 15), "Safeway", 40.0, "grocery"),
            txn((2026, 1, 20), "Chevron", 50.0, "transport.fuel"),
        ];
        let estimates = estimate_batch(&txns);
        let months = monthly_totals(&txns, &estimates);

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].0, "2026-01");
        assert!((months[0].1 - (14.0 + 26.0)).abs() < 1e-9);
        assert_eq!(months[1].0, "2026-03");
    }
}
