//! carbon-core: shared types for the carbon-ledger emission estimator

pub mod estimate;
pub mod factor;
pub mod transaction;

pub use estimate::{Confidence, EmissionEstimateResult, EmissionMethod, EstimateDetails, Quantity};
pub use factor::{EmissionFactor, FactorScope, UnitType};
pub use transaction::Transaction;
