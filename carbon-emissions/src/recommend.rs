//! Rule-based reduction recommendations from a category breakdown.
//!
//! Deterministic threshold cascade, evaluated in declaration order. No
//! personalization or external services; the estimated reductions are the
//! published rule-of-thumb fractions for each action.

use carbon_core::Transaction;
use serde::Serialize;

use crate::summary::CategoryStats;

/// A single actionable suggestion with its estimated saving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// Estimated monthly reduction if the suggestion is followed
    pub est_reduction_kg: f64,
    /// Category the suggestion targets
    pub category: String,
}

fn stat<'a>(stats: &'a [CategoryStats], category: &str) -> Option<&'a CategoryStats> {
    stats.iter().find(|s| s.category == category)
}

/// Generate recommendations for one breakdown (typically one month).
///
/// Rules fire independently; a heavy-driving month can produce both fuel
/// recommendations. Output order follows rule declaration order.
pub fn recommend(stats: &[CategoryStats]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let fuel = stat(stats, "transport.fuel");
    if let Some(fuel) = fuel {
        if fuel.percentage > 20.0 {
            recs.push(Recommendation {
                title: "Reduce Driving Emissions".to_string(),
                description: format!(
                    "Fuel purchases account for {:.1}% of your carbon footprint. \
                     Try carpooling or public transit 2 days per week to reduce \
                     emissions by ~20%.",
                    fuel.percentage
                ),
                est_reduction_kg: fuel.total_kg * 0.20,
                category: "transport.fuel".to_string(),
            });
        }
        if fuel.total_kg > 50.0 {
            recs.push(Recommendation {
                title: "Switch to Public Transportation".to_string(),
                description: "Replace one weekly car trip with public transit. Public \
                              transit emits 45% less CO2 per passenger mile than driving alone."
                    .to_string(),
                est_reduction_kg: fuel.total_kg * 0.15,
                category: "transport.publictransit".to_string(),
            });
        }
    }

    if let Some(electricity) = stat(stats, "utilities.electricity") {
        if electricity.total_kg > 80.0 {
            recs.push(Recommendation {
                title: "Optimize Home Energy Use".to_string(),
                description: "Your electricity usage is above average. Switch to LED \
                              bulbs, adjust thermostat by 2\u{b0}F, and use power strips to \
                              eliminate phantom loads. Potential reduction: 15-20%."
                    .to_string(),
                est_reduction_kg: electricity.total_kg * 0.175,
                category: "utilities.electricity".to_string(),
            });
        }
    }

    if let Some(airline) = stat(stats, "transport.airline") {
        if airline.total_kg > 100.0 {
            recs.push(Recommendation {
                title: "Consider Alternatives to Air Travel".to_string(),
                description: "Air travel is carbon-intensive. For trips under 500 miles, \
                              consider train or car alternatives. For necessary flights, \
                              purchase carbon offsets."
                    .to_string(),
                est_reduction_kg: airline.total_kg * 0.10,
                category: "transport.airline".to_string(),
            });
        }
    }

    if let Some(apparel) = stat(stats, "apparel") {
        if apparel.total_kg > 30.0 {
            recs.push(Recommendation {
                title: "Choose Sustainable Fashion".to_string(),
                description: "Fast fashion has a significant carbon footprint. Buy fewer, \
                              higher-quality items, shop secondhand, or rent special \
                              occasion clothing."
                    .to_string(),
                est_reduction_kg: apparel.total_kg * 0.25,
                category: "apparel".to_string(),
            });
        }
    }

    let food_kg = stat(stats, "restaurants").map(|s| s.total_kg).unwrap_or(0.0)
        + stat(stats, "grocery").map(|s| s.total_kg).unwrap_or(0.0);
    if food_kg > 60.0 {
        recs.push(Recommendation {
            title: "Reduce Food Carbon Footprint".to_string(),
            description: "Food accounts for a significant portion of your emissions. Try \
                          one meatless day per week, reduce food waste, and buy local \
                          produce."
                .to_string(),
            est_reduction_kg: food_kg * 0.15,
            category: "food".to_string(),
        });
    }

    // General efficiency rule: a heavy month overall gets a budget nudge
    // regardless of which categories drove it.
    let total_kg: f64 = stats.iter().map(|s| s.total_kg).sum();
    if total_kg > 200.0 {
        recs.push(Recommendation {
            title: "Set a Monthly Carbon Budget".to_string(),
            description: format!(
                "Your monthly emissions are {total_kg:.0} kg CO2e. Set a goal to reduce \
                 by 10% next month through small changes across all categories."
            ),
            est_reduction_kg: total_kg * 0.10,
            category: "general".to_string(),
        });
    }

    recs
}

/// Convenience wrapper: estimate, summarize, recommend in one pass.
pub fn recommend_for_transactions(txns: &[Transaction]) -> Vec<Recommendation> {
    let estimates = crate::estimator::estimate_batch(txns);
    let stats = crate::summary::summarize(txns, &estimates);
    recommend(&stats)
}
