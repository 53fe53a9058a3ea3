//! Merging generated events into an ordered ledger and deriving payday metrics.

pub mod builder;
pub mod metrics;
pub mod request;

pub use builder::{build_forecast, compare_events, ForecastTotals};
pub use metrics::{compute_next_payday_metrics, PaydayMetrics};
pub use request::{ForecastProfile, ForecastReport, ForecastRequest};
