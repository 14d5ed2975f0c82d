//! End-to-end pipeline over the workspace CSV fixture:
//! import -> classify -> estimate -> summarize -> recommend.

use carbon_core::{Confidence, EmissionMethod};
use carbon_emissions::{
    estimate_batch, import_transactions_csv, monthly_totals, recommend, summarize,
};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("sample_transactions.csv")
}

#[test]
fn test_import_classifies_every_row() {
    let txns = import_transactions_csv(fixture_path()).expect("fixture parses");
    assert_eq!(txns.len(), 12);
    assert!(txns.iter().all(|t| t.category.is_some()));

    // MCC-driven
    let shell = txns.iter().find(|t| t.description.contains("SHELL")).unwrap();
    assert_eq!(shell.category.as_deref(), Some("transport.fuel"));
    let cvs = txns.iter().find(|t| t.description.contains("CVS")).unwrap();
    assert_eq!(cvs.category.as_deref(), Some("pharmacy"));

    // Keyword-driven (no MCC column value)
    let chevron = txns.iter().find(|t| t.description.contains("CHEVRON")).unwrap();
    assert_eq!(chevron.mcc, None);
    assert_eq!(chevron.category.as_deref(), Some("transport.fuel"));
    let netflix = txns.iter().find(|t| t.description.contains("NETFLIX")).unwrap();
    assert_eq!(netflix.category.as_deref(), Some("entertainment"));

    // Nothing matched
    let random = txns.iter().find(|t| t.description.contains("RANDOM")).unwrap();
    assert_eq!(random.category.as_deref(), Some("other"));
}

#[test]
fn test_estimates_pick_the_right_tier() {
    let txns = import_transactions_csv(fixture_path()).unwrap();
    let estimates = estimate_batch(&txns);
    assert_eq!(estimates.len(), txns.len());

    // Descriptions with embedded quantities go activity-based.
    let shell = &estimates[0];
    assert_eq!(shell.method, EmissionMethod::Activity);
    assert!((shell.kg_co2e - 111.125).abs() < 1e-9); // 12.5 gal * 8.89
    assert_eq!(shell.details.confidence, Confidence::High);

    let pge = &estimates[2];
    assert_eq!(pge.method, EmissionMethod::Activity);
    assert!((pge.kg_co2e - 173.25).abs() < 1e-9); // 450 kWh * 0.385

    let exxon = &estimates[10];
    assert_eq!(exxon.method, EmissionMethod::Activity);
    assert!((exxon.kg_co2e - 9.2 * 8.89).abs() < 1e-9);

    // Plain dollar rows go spend-based.
    let grocery = &estimates[1];
    assert_eq!(grocery.method, EmissionMethod::Intensity);
    assert!((grocery.kg_co2e - 127.45 * 0.35).abs() < 1e-9);
    assert_eq!(grocery.details.confidence, Confidence::Medium);

    // MCC resolved "pharmacy", but the intensity table has no pharmacy
    // entry, so this degrades to the catch-all at low confidence.
    let cvs = &estimates[11];
    assert_eq!(cvs.details.category_key, "other");
    assert_eq!(cvs.details.confidence, Confidence::Low);
    assert!((cvs.kg_co2e - 24.60 * 0.25).abs() < 1e-9);

    // Product invariant holds for every row, both tiers.
    for estimate in &estimates {
        assert_eq!(estimate.kg_co2e, estimate.details.input * estimate.details.factor);
    }
}

#[test]
fn test_summary_rolls_activity_rows_into_parent_categories() {
    let txns = import_transactions_csv(fixture_path()).unwrap();
    let estimates = estimate_batch(&txns);
    let stats = summarize(&txns, &estimates);

    let fuel = stats.iter().find(|s| s.category == "transport.fuel").unwrap();
    assert_eq!(fuel.count, 3); // Shell, Chevron, Exxon
    assert!((fuel.total_kg - (111.125 + 62.0 * 0.52 + 9.2 * 8.89)).abs() < 1e-9);

    // Fuel is the biggest bucket in the fixture.
    assert_eq!(stats[0].category, "transport.fuel");

    let total_pct: f64 = stats.iter().map(|s| s.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-9);
}

#[test]
fn test_monthly_totals_split_the_fixture() {
    let txns = import_transactions_csv(fixture_path()).unwrap();
    let estimates = estimate_batch(&txns);
    let months = monthly_totals(&txns, &estimates);

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].0, "2026-01");
    assert_eq!(months[1].0, "2026-02");

    let grand: f64 = estimates.iter().map(|e| e.kg_co2e).sum();
    assert!((months[0].1 + months[1].1 - grand).abs() < 1e-9);
}

#[test]
fn test_recommendations_fire_for_the_heavy_categories() {
    let txns = import_transactions_csv(fixture_path()).unwrap();
    let estimates = estimate_batch(&txns);
    let stats = summarize(&txns, &estimates);
    let recs = recommend(&stats);

    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Reduce Driving Emissions",
            "Switch to Public Transportation",
            "Optimize Home Energy Use",
            "Consider Alternatives to Air Travel",
            "Reduce Food Carbon Footprint",
            "Set a Monthly Carbon Budget",
        ]
    );

    // Transit rule saves 15% of the fuel bucket.
    let fuel_kg = stats.iter().find(|s| s.category == "transport.fuel").unwrap().total_kg;
    assert!((recs[1].est_reduction_kg - fuel_kg * 0.15).abs() < 1e-9);

    // The fixture's total is well over 200 kg, so the budget rule caps
    // the list with a 10% overall reduction.
    let grand: f64 = estimates.iter().map(|e| e.kg_co2e).sum();
    assert!((recs[5].est_reduction_kg - grand * 0.10).abs() < 1e-9);
}
