use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    date::{add_months, month_key},
    domain::ForecastRow,
};

/// Number of calendar months covered by the category breakdown.
pub const CATEGORY_MONTHS: i32 = 12;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCategoryBreakdown {
    pub month: String,
    pub slices: Vec<CategorySlice>,
}

impl MonthlyCategoryBreakdown {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.amount).sum()
    }
}

/// Expense spend per category for the twelve months starting at `horizon_start`.
///
/// Every month is listed even when nothing was spent; categories without
/// spend are left out of that month's slices. Slices are ordered by amount,
/// largest first.
pub fn monthly_category_slices(
    rows: &[ForecastRow],
    horizon_start: NaiveDate,
) -> Vec<MonthlyCategoryBreakdown> {
    let mut spend: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for row in rows.iter().filter(|row| row.is_expense()) {
        *spend
            .entry(row.month_key())
            .or_default()
            .entry(row.category.clone())
            .or_default() += row.amount;
    }

    let first_month = horizon_start.with_day(1).unwrap_or(horizon_start);
    (0..CATEGORY_MONTHS)
        .map(|offset| {
            let month = month_key(add_months(first_month, offset));
            let mut slices: Vec<CategorySlice> = spend
                .remove(&month)
                .unwrap_or_default()
                .into_iter()
                .filter(|(_, amount)| *amount != 0.0)
                .map(|(category, amount)| CategorySlice { category, amount })
                .collect();
            slices.sort_by(|a, b| {
                b.amount
                    .total_cmp(&a.amount)
                    .then_with(|| a.category.cmp(&b.category))
            });
            MonthlyCategoryBreakdown { month, slices }
        })
        .collect()
}
