//! Estimate result types produced by the emissions engine

use serde::{Deserialize, Serialize};

/// A physical quantity pulled out of a transaction description.
///
/// Ephemeral: produced by the extractor, consumed immediately by the
/// estimator. `unit` is always one of the normalized spellings
/// ("gallon", "kWh", "mile").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

/// Which estimation path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmissionMethod {
    /// Physical quantity x physical factor (more accurate)
    Activity,
    /// Dollar amount x spend-intensity factor
    Intensity,
}

impl EmissionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionMethod::Activity => "ACTIVITY",
            EmissionMethod::Intensity => "INTENSITY",
        }
    }
}

/// Estimate quality signal. The engine never fails a call; it degrades
/// confidence instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Activity-based result from an extracted physical quantity
    High,
    /// Spend-based result with an exact category factor
    Medium,
    /// Spend-based result that fell back to the default category
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Provenance of a single estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDetails {
    /// Dataset the factor came from
    pub source: String,
    /// The factor applied (kg CO2e per unit)
    pub factor: f64,
    /// Unit the input was measured in ("USD" for spend-based)
    pub unit: String,
    /// Raw input the factor was applied to (quantity value or dollars)
    pub input: f64,
    /// Category key that resolved the factor
    pub category_key: String,
    pub notes: String,
    pub confidence: Confidence,
}

/// One emission estimate for one transaction.
///
/// Invariant: `kg_co2e == details.input * details.factor` exactly; the
/// engine never rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEstimateResult {
    #[serde(rename = "kgCO2e")]
    pub kg_co2e: f64,
    pub method: EmissionMethod,
    pub details: EstimateDetails,
}
