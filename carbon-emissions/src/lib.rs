//! carbon-emissions: transaction classification, quantity extraction,
//! emission factor datasets, and the two-tier emission estimator.

pub mod classify;
pub mod csv_import;
pub mod datasets;
pub mod estimator;
pub mod extract;
pub mod recommend;
pub mod summary;

pub use classify::{classify, DEFAULT_CATEGORY};
pub use csv_import::import_transactions_csv;
pub use estimator::{estimate, estimate_batch, estimate_transaction};
pub use extract::extract_quantity;
pub use recommend::{recommend, recommend_for_transactions, Recommendation};
pub use summary::{monthly_totals, summarize, CategoryStats};
