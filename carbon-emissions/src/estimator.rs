//! Two-tier emission estimation: activity-based when a physical quantity
//! is visible in the description, spend-based dollar intensity otherwise.

use carbon_core::{
    Confidence, EmissionEstimateResult, EmissionMethod, EstimateDetails, Transaction,
};

use crate::classify::{classify, DEFAULT_CATEGORY};
use crate::datasets::{find_activity_factor, find_intensity_factor};
use crate::extract::extract_quantity;

/// Estimate emissions for one transaction.
///
/// Never fails: when nothing better is available the result degrades to
/// the default-category dollar intensity with `Confidence::Low`. Callers
/// own the `amount_usd > 0` contract — the arithmetic here is a plain
/// multiplication and propagates whatever it is given.
pub fn estimate(amount_usd: f64, category: &str, description: &str) -> EmissionEstimateResult {
    // Activity-based first: physical-unit data beats dollar averages.
    if let Some(quantity) = extract_quantity(description) {
        if let Some(result) = activity_estimate(category, quantity.value, &quantity.unit) {
            return result;
        }
    }

    intensity_estimate(amount_usd, category)
}

/// Estimate a normalized transaction, classifying it first when it does
/// not already carry a category.
pub fn estimate_transaction(txn: &Transaction) -> EmissionEstimateResult {
    match &txn.category {
        Some(category) => estimate(txn.amount_usd, category, &txn.description),
        None => {
            let category = classify(txn.mcc.as_deref(), &txn.description);
            estimate(txn.amount_usd, category, &txn.description)
        }
    }
}

/// Estimate many transactions. Pure repeated invocation: results come
/// back in input order and each is independent of the rest.
pub fn estimate_batch(txns: &[Transaction]) -> Vec<EmissionEstimateResult> {
    txns.iter().map(estimate_transaction).collect()
}

fn activity_estimate(category: &str, value: f64, unit: &str) -> Option<EmissionEstimateResult> {
    let factor = find_activity_factor(category, unit)?;

    Some(EmissionEstimateResult {
        kg_co2e: value * factor.kg_co2e_per_unit,
        method: EmissionMethod::Activity,
        details: EstimateDetails {
            source: factor.source.clone(),
            factor: factor.kg_co2e_per_unit,
            unit: factor.unit.clone(),
            input: value,
            category_key: factor.category_key.clone(),
            notes: factor.notes.clone(),
            confidence: Confidence::High,
        },
    })
}

fn intensity_estimate(amount_usd: f64, category: &str) -> EmissionEstimateResult {
    let factor = find_intensity_factor(category);
    let fell_back = factor.category_key != category;

    EmissionEstimateResult {
        kg_co2e: amount_usd * factor.kg_co2e_per_unit,
        method: EmissionMethod::Intensity,
        details: EstimateDetails {
            source: factor.source.clone(),
            factor: factor.kg_co2e_per_unit,
            unit: "USD".to_string(),
            input: amount_usd,
            category_key: factor.category_key.clone(),
            notes: factor.notes.clone(),
            confidence: if fell_back || category == DEFAULT_CATEGORY {
                Confidence::Low
            } else {
                Confidence::Medium
            },
        },
    }
}
