//! Normalized transaction input (source-agnostic)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single normalized transaction, however it was imported.
///
/// The estimator only reads `amount_usd`, `description` and the category
/// fields; everything else is carried for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive number means spend in US dollars. Callers own the
    /// `amount_usd > 0` contract; the engine multiplies without checking.
    pub amount_usd: f64,
    /// Merchant category code, when the issuer provides one
    pub mcc: Option<String>,
    /// Resolved category key; `None` means not yet classified
    pub category: Option<String>,
}

impl Transaction {
    /// Year-month bucket for monthly reporting, e.g. "2026-02"
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_zero_pads() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
            description: "CLIPPER SYSTEMS".to_string(),
            amount_usd: 10.0,
            mcc: None,
            category: None,
        };
        assert_eq!(t.month_key(), "2026-02");
    }
}
