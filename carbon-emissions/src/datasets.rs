//! Static emission-factor datasets.
//!
//! Two read-only tables built once at first use: spend-based dollar
//! intensities (EPA EIO-LCA averages, plus DEFRA for air travel) and
//! activity-based physical factors (EPA, EPA eGRID, DEFRA). Entry order
//! is part of the lookup contract: activity lookups are prefix matches
//! and take the first hit, so "transport.fuel" resolves to gasoline
//! because gasoline is declared before diesel.

use std::sync::LazyLock;

use carbon_core::{EmissionFactor, FactorScope, UnitType};

fn spend(category_key: &str, source: &str, kg_per_usd: f64, notes: &str) -> EmissionFactor {
    EmissionFactor {
        category_key: category_key.to_string(),
        source: source.to_string(),
        scope: FactorScope::Spend,
        unit_type: UnitType::Monetary,
        unit: "USD".to_string(),
        kg_co2e_per_unit: kg_per_usd,
        notes: notes.to_string(),
    }
}

fn activity(
    category_key: &str,
    source: &str,
    scope: FactorScope,
    unit_type: UnitType,
    unit: &str,
    kg_per_unit: f64,
    notes: &str,
) -> EmissionFactor {
    EmissionFactor {
        category_key: category_key.to_string(),
        source: source.to_string(),
        scope,
        unit_type,
        unit: unit.to_string(),
        kg_co2e_per_unit: kg_per_unit,
        notes: notes.to_string(),
    }
}

/// Spend-based intensity factors (kg CO2e per US dollar), exact-match by
/// category key. The `"other"` entry is the mandatory catch-all.
pub static SPEND_INTENSITY_FACTORS: LazyLock<Vec<EmissionFactor>> = LazyLock::new(|| {
    vec![
        spend("transport.fuel", "EPA/EIOMLCA", 0.52,
            "Gasoline stations - average intensity per dollar spent"),
        spend("transport.publictransit", "EPA/EIOMLCA", 0.18,
            "Public transit - average intensity per dollar spent"),
        spend("transport.airline", "DEFRA", 0.45,
            "Air travel - average intensity per dollar spent"),
        spend("utilities.electricity", "EPA eGRID", 0.62,
            "Electricity - US average grid intensity per dollar"),
        spend("utilities.telecom", "EPA/EIOMLCA", 0.08,
            "Telecommunications - average intensity per dollar"),
        spend("grocery", "EPA/EIOMLCA", 0.35,
            "Grocery - average food intensity per dollar"),
        spend("restaurants", "EPA/EIOMLCA", 0.42,
            "Food services and restaurants - average intensity"),
        spend("apparel", "EPA/EIOMLCA", 0.28,
            "Clothing and apparel - average manufacturing intensity"),
        spend("electronics", "EPA/EIOMLCA", 0.31,
            "Consumer electronics - average intensity"),
        spend("home", "EPA/EIOMLCA", 0.38,
            "Home goods and furniture - average intensity"),
        spend("entertainment", "EPA/EIOMLCA", 0.15,
            "Entertainment services - average intensity"),
        spend("healthcare", "EPA/EIOMLCA", 0.22,
            "Healthcare services - average intensity"),
        spend("other", "EPA/EIOMLCA", 0.25,
            "Other services - default average intensity"),
    ]
});

/// Activity-based factors, matched by category-key prefix plus exact unit.
pub static ACTIVITY_FACTORS: LazyLock<Vec<EmissionFactor>> = LazyLock::new(|| {
    vec![
        activity("transport.fuel.gasoline", "EPA", FactorScope::Combustion, UnitType::Volume,
            "gallon", 8.89, "Gasoline combustion - 8.89 kg CO2e per gallon"),
        activity("transport.fuel.diesel", "EPA", FactorScope::Combustion, UnitType::Volume,
            "gallon", 10.21, "Diesel combustion - 10.21 kg CO2e per gallon"),
        activity("utilities.electricity.grid", "EPA eGRID", FactorScope::Consumption, UnitType::Energy,
            "kWh", 0.385, "US average grid electricity - 0.385 kg CO2e per kWh"),
        activity("transport.airline.short", "DEFRA", FactorScope::Travel, UnitType::Distance,
            "mile", 0.254, "Short-haul flight (<500 mi) - economy class"),
        activity("transport.airline.long", "DEFRA", FactorScope::Travel, UnitType::Distance,
            "mile", 0.195, "Long-haul flight (>3000 mi) - economy class"),
    ]
});

/// Find an activity factor whose key starts with `category` and whose unit
/// matches exactly. Prefix matching lets a parent category like
/// "transport.fuel" route to fuel-type-specific sub-factors; first entry
/// in table order wins.
pub fn find_activity_factor(category: &str, unit: &str) -> Option<&'static EmissionFactor> {
    ACTIVITY_FACTORS
        .iter()
        .find(|f| f.category_key.starts_with(category) && f.unit == unit)
}

/// Find the spend-intensity factor for a category, falling back to the
/// `"other"` catch-all when there is no exact match.
pub fn find_intensity_factor(category: &str) -> &'static EmissionFactor {
    SPEND_INTENSITY_FACTORS
        .iter()
        .find(|f| f.category_key == category)
        .unwrap_or_else(|| {
            SPEND_INTENSITY_FACTORS
                .iter()
                .find(|f| f.category_key == "other")
                .expect("intensity table carries an 'other' catch-all")
        })
}

/// All factors, spend-based first — mirrors the reference dataset export.
pub fn all_factors() -> Vec<&'static EmissionFactor> {
    SPEND_INTENSITY_FACTORS
        .iter()
        .chain(ACTIVITY_FACTORS.iter())
        .collect()
}
