//! Emission factor reference types

use serde::{Deserialize, Serialize};

/// What a factor measures: dollar intensity or a direct physical activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorScope {
    /// Average emissions per dollar spent in a sector
    Spend,
    /// Fuel combustion
    Combustion,
    /// Metered consumption (e.g. grid electricity)
    Consumption,
    /// Passenger travel over distance
    Travel,
}

/// Unit family a factor is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Monetary,
    Volume,
    Energy,
    Distance,
}

/// A single emission factor: kg CO2e per unit of activity or spend.
///
/// Reference data. Tables are built once at first use and never mutated;
/// lookups borrow entries for the duration of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactor {
    /// Dotted category key ("transport.fuel.gasoline", "grocery")
    pub category_key: String,
    /// Publishing dataset (EPA, DEFRA, EPA eGRID, EPA/EIOMLCA)
    pub source: String,
    pub scope: FactorScope,
    pub unit_type: UnitType,
    /// Unit the factor is denominated in ("USD", "gallon", "kWh", "mile")
    pub unit: String,
    #[serde(rename = "kgCO2ePerUnit")]
    pub kg_co2e_per_unit: f64,
    /// Provenance note carried through into estimate details
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_serializes_with_original_field_names() {
        let f = EmissionFactor {
            category_key: "grocery".to_string(),
            source: "EPA/EIOMLCA".to_string(),
            scope: FactorScope::Spend,
            unit_type: UnitType::Monetary,
            unit: "USD".to_string(),
            kg_co2e_per_unit: 0.35,
            notes: "Grocery - average food intensity per dollar".to_string(),
        };
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["categoryKey"], "grocery");
        assert_eq!(json["scope"], "spend");
        assert_eq!(json["unitType"], "monetary");
        assert_eq!(json["kgCO2ePerUnit"], 0.35);
    }
}
