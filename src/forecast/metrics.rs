use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ForecastRow;

/// Affordability snapshot up to the next paycheck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaydayMetrics {
    pub next_payday: NaiveDate,
    pub balance_on_next_payday: f64,
    pub lowest_balance_before_next_payday: f64,
    /// Lowest pre-payday balance minus the buffer; negative means a shortfall.
    pub safe_to_spend_until_next_payday: f64,
}

/// Derives payday metrics from ordered forecast rows.
pub fn compute_next_payday_metrics(
    rows: &[ForecastRow],
    next_payday: NaiveDate,
    minimum_buffer: f64,
    starting_balance: f64,
) -> PaydayMetrics {
    let balance_on_next_payday = rows
        .iter()
        .rev()
        .find(|row| row.date <= next_payday)
        .map(|row| row.running_balance)
        .unwrap_or(starting_balance);
    let lowest_balance_before_next_payday = rows
        .iter()
        .filter(|row| row.date < next_payday)
        .map(|row| row.running_balance)
        .fold(starting_balance, f64::min);

    PaydayMetrics {
        next_payday,
        balance_on_next_payday,
        lowest_balance_before_next_payday,
        safe_to_spend_until_next_payday: lowest_balance_before_next_payday - minimum_buffer,
    }
}
