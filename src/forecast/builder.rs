use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{EventKind, ForecastEvent, ForecastRow};

fn kind_rank(kind: EventKind) -> u8 {
    match kind {
        EventKind::Income => 0,
        EventKind::Expense => 1,
    }
}

/// Total order used for every forecast: date, income before expense,
/// expense category, then display name.
pub fn compare_events(a: &ForecastEvent, b: &ForecastEvent) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| {
            if a.is_expense() && b.is_expense() {
                a.category.cmp(&b.category)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.name.cmp(&b.name))
}

/// Orders events and folds the running balance, starting at `starting_balance`.
///
/// The input is left untouched; events that tie on every key keep their
/// input order.
pub fn build_forecast(events: &[ForecastEvent], starting_balance: f64) -> Vec<ForecastRow> {
    let mut ordered = events.to_vec();
    ordered.sort_by(compare_events);

    let mut balance = starting_balance;
    ordered
        .into_iter()
        .map(|event| {
            balance += event.signed_amount();
            ForecastRow {
                event,
                running_balance: balance,
            }
        })
        .collect()
}

/// Horizon-wide sums over a built forecast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastTotals {
    pub event_count: usize,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub ending_balance: f64,
    pub lowest_balance: f64,
}

impl ForecastTotals {
    pub fn from_rows(rows: &[ForecastRow], starting_balance: f64) -> Self {
        let mut totals = ForecastTotals {
            event_count: rows.len(),
            ending_balance: starting_balance,
            lowest_balance: starting_balance,
            ..ForecastTotals::default()
        };
        for row in rows {
            match row.kind {
                EventKind::Income => totals.income += row.amount,
                EventKind::Expense => totals.expenses += row.amount,
            }
            totals.lowest_balance = totals.lowest_balance.min(row.running_balance);
            totals.ending_balance = row.running_balance;
        }
        totals.net = totals.income - totals.expenses;
        totals
    }
}
