use serde::{Deserialize, Serialize};

use super::{
    highlights::{finite_expense_ids, last_expense_date_by_source, last_expense_row_id_by_month},
    summary::monthly_balance_summaries,
};
use crate::domain::{Expense, ForecastRow};

/// Alternating shade applied to consecutive months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MonthBand {
    Even,
    Odd,
}

/// Month spend compared with the month before it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SpendTrend {
    /// Spent less than the previous month.
    Better,
    Worse,
    Equal,
}

impl SpendTrend {
    fn compare(current: f64, previous: f64) -> SpendTrend {
        if current < previous {
            SpendTrend::Better
        } else if current > previous {
            SpendTrend::Worse
        } else {
            SpendTrend::Equal
        }
    }
}

/// A forecast row decorated for ledger-style presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BandedRow {
    #[serde(flatten)]
    pub row: ForecastRow,
    pub month: String,
    pub is_month_start: bool,
    pub is_month_end: bool,
    pub band: MonthBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<SpendTrend>,
    /// Final occurrence of an expense that repeats within the forecast.
    pub is_last_occurrence: bool,
    /// Last expense row of its month.
    pub is_quick_add_anchor: bool,
}

pub fn banded_rows(rows: &[ForecastRow], expenses: &[Expense]) -> Vec<BandedRow> {
    let summaries = monthly_balance_summaries(rows, 0.0);
    let finite_ids = finite_expense_ids(expenses, rows);
    let last_dates = last_expense_date_by_source(rows);
    let anchors = last_expense_row_id_by_month(rows);

    let mut banded = Vec::with_capacity(rows.len());
    let mut month_index = 0usize;
    for (position, row) in rows.iter().enumerate() {
        let month = row.month_key();
        let is_month_start = position == 0 || rows[position - 1].month_key() != month;
        let is_month_end = rows
            .get(position + 1)
            .map(|next| next.month_key() != month)
            .unwrap_or(true);
        if is_month_start && position > 0 {
            month_index += 1;
        }

        let trend = if is_month_start && month_index > 0 {
            match (summaries.get(month_index), summaries.get(month_index - 1)) {
                (Some(current), Some(previous)) => {
                    Some(SpendTrend::compare(current.spent, previous.spent))
                }
                _ => None,
            }
        } else {
            None
        };

        let is_last_occurrence = row.is_expense()
            && row.source_id.as_ref().is_some_and(|source| {
                finite_ids.contains(source) && last_dates.get(source) == Some(&row.date)
            });
        let is_quick_add_anchor = anchors.get(&month) == Some(&row.id);

        banded.push(BandedRow {
            row: row.clone(),
            band: if month_index % 2 == 0 {
                MonthBand::Even
            } else {
                MonthBand::Odd
            },
            month,
            is_month_start,
            is_month_end,
            trend,
            is_last_occurrence,
            is_quick_add_anchor,
        });
    }
    banded
}
