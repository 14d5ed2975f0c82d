use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use carbon_emissions::datasets::{ACTIVITY_FACTORS, SPEND_INTENSITY_FACTORS};
use carbon_emissions::{
    classify, estimate, estimate_batch, import_transactions_csv, monthly_totals, recommend,
    summarize,
};

#[derive(Parser, Debug)]
#[command(name = "carbon", version, about = "Estimate CO2e emissions from card transactions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate emissions for a single transaction
    Estimate {
        /// Transaction amount in US dollars (must be positive)
        #[arg(long)]
        amount: f64,

        /// Free-text transaction description
        #[arg(long)]
        description: String,

        /// Category key; classified from MCC + description when omitted
        #[arg(long)]
        category: Option<String>,

        /// Merchant category code, if the issuer provided one
        #[arg(long)]
        mcc: Option<String>,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import a transaction CSV and print the footprint report
    Batch {
        /// Path to Date,Description,Amount,MCC,Category CSV
        #[arg(long)]
        csv: PathBuf,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the emission factor tables
    Factors {
        /// Only activity-based (physical unit) factors
        #[arg(long)]
        activity: bool,

        /// Only spend-based (per-dollar) factors
        #[arg(long)]
        spend: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Estimate {
            amount,
            description,
            category,
            mcc,
            json,
        } => {
            // The engine multiplies whatever it is given; enforce the
            // input contract at this boundary instead.
            if amount <= 0.0 {
                bail!("--amount must be positive (got {amount})");
            }

            let category = category
                .unwrap_or_else(|| classify(mcc.as_deref(), &description).to_string());
            let result = estimate(amount, &category, &description);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("category:   {category}");
                println!("method:     {}", result.method.as_str());
                println!("kg CO2e:    {:.3}", result.kg_co2e);
                println!("confidence: {}", result.details.confidence.as_str());
                println!(
                    "factor:     {} kg CO2e per {} ({})",
                    result.details.factor, result.details.unit, result.details.source
                );
                println!("note:       {}", result.details.notes);
            }
        }

        Command::Batch { csv, json } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }

            let txns = import_transactions_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;
            let estimates = estimate_batch(&txns);
            let stats = summarize(&txns, &estimates);
            let months = monthly_totals(&txns, &estimates);
            let recs = recommend(&stats);
            let total_kg: f64 = estimates.iter().map(|e| e.kg_co2e).sum();

            if json {
                let report = serde_json::json!({
                    "transactions": txns.len(),
                    "totalKgCO2e": total_kg,
                    "categories": stats,
                    "monthly": months,
                    "recommendations": recs,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("Parsed {} transactions from {}", txns.len(), csv.display());
            println!("Total footprint: {:.1} kg CO2e\n", total_kg);

            for s in &stats {
                println!(
                    "{:<28} {:>8.1} kg  {:>5.1}%  ({} txns)",
                    s.category, s.total_kg, s.percentage, s.count
                );
            }

            println!();
            for (month, kg) in &months {
                println!("{month}: {kg:.1} kg CO2e");
            }

            if !recs.is_empty() {
                println!("\nRecommendations:");
                for r in &recs {
                    println!("- {} (save ~{:.1} kg): {}", r.title, r.est_reduction_kg, r.description);
                }
            }
        }

        Command::Factors { activity, spend } => {
            // No flag means both tables.
            let both = activity == spend;
            if activity || both {
                println!("Activity factors (physical units):");
                for f in ACTIVITY_FACTORS.iter() {
                    println!(
                        "  {:<30} {:>7.3} kg CO2e/{:<6} [{}] {}",
                        f.category_key, f.kg_co2e_per_unit, f.unit, f.source, f.notes
                    );
                }
            }
            if both {
                println!();
            }
            if spend || both {
                println!("Spend intensity factors (per USD):");
                for f in SPEND_INTENSITY_FACTORS.iter() {
                    println!(
                        "  {:<30} {:>7.3} kg CO2e/USD    [{}] {}",
                        f.category_key, f.kg_co2e_per_unit, f.source, f.notes
                    );
                }
            }
        }
    }

    Ok(())
}
