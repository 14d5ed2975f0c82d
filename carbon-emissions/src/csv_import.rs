//! Parse transaction CSV exports into normalized transactions.
//!
//! Expected columns after the header row:
//! Date,Description,Amount,MCC,Category
//! Leading junk rows (bank boilerplate) are tolerated; parsing starts at
//! the row whose first field is "Date". MCC and Category may be empty.

use anyhow::{Context, Result};
use carbon_core::Transaction;
use chrono::NaiveDate;
use std::path::Path;

use crate::classify::classify;

/// Parse a transaction CSV, returning all valid rows.
///
/// Rows with an empty or unparseable date are skipped. Transactions that
/// arrive without a category are classified from MCC + description, so
/// every returned transaction carries one.
pub fn import_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut txns = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        // Skip boilerplate until the header row
        if !header_found {
            if record.get(0).map(|s| s.trim()) == Some("Date") {
                header_found = true;
            }
            continue;
        }

        let date_str = record.get(0).unwrap_or("").trim();
        if date_str.is_empty() {
            continue;
        }
        let date = match NaiveDate::parse_from_str(date_str, "%m/%d/%Y") {
            Ok(d) => d,
            Err(_) => continue, // skip unparseable rows
        };

        let description = record.get(1).unwrap_or("").trim().to_string();
        let amount_usd: f64 = record
            .get(2)
            .unwrap_or("0")
            .trim()
            .parse()
            .unwrap_or(0.0);

        let mcc = match record.get(3).map(str::trim) {
            Some("") | None => None,
            Some(code) => Some(code.to_string()),
        };
        let category = match record.get(4).map(str::trim) {
            Some("") | None => Some(classify(mcc.as_deref(), &description).to_string()),
            Some(key) => Some(key.to_string()),
        };

        txns.push(Transaction {
            date,
            description,
            amount_usd,
            mcc,
            category,
        });
    }

    Ok(txns)
}
