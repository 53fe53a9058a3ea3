use serde::{Deserialize, Serialize};

use crate::domain::ForecastRow;

/// Balance movement for one `YYYY-MM` month of the forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub opening_balance: f64,
    pub ending_balance: f64,
    pub spent: f64,
}

impl MonthlySummary {
    pub fn change(&self) -> f64 {
        self.ending_balance - self.opening_balance
    }
}

/// Groups ordered rows by month, carrying the balance across month boundaries.
pub fn monthly_balance_summaries(
    rows: &[ForecastRow],
    starting_balance: f64,
) -> Vec<MonthlySummary> {
    let mut summaries: Vec<MonthlySummary> = Vec::new();
    let mut carried = starting_balance;

    for row in rows {
        let month = row.month_key();
        let starts_month = summaries
            .last()
            .map(|current| current.month != month)
            .unwrap_or(true);
        if starts_month {
            summaries.push(MonthlySummary {
                month,
                opening_balance: carried,
                ending_balance: carried,
                spent: 0.0,
            });
        }
        if let Some(current) = summaries.last_mut() {
            if row.is_expense() {
                current.spent += row.amount;
            }
            current.ending_balance = row.running_balance;
        }
        carried = row.running_balance;
    }

    tracing::debug!(months = summaries.len(), "summarized forecast months");
    summaries
}
