//! Paycheck configuration and take-home pay derivation.

pub mod breakdown;
pub mod paycheck;

pub use breakdown::{
    compute_gross_pay_from_hourly, compute_net_pay, compute_net_pay_breakdown, round_to_cents,
    NetPayBreakdown,
};
pub use paycheck::{
    DeductionKind, DeductionLine, GrossInput, PayFrequency, PaycheckConfig, PaycheckInput,
};

/// Reasons a pay amount could not be derived.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayError {
    #[error("missing or non-positive {0}")]
    MissingInput(&'static str),
    #[error("net pay is unavailable")]
    Unavailable,
}
