use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::domain::{Expense, ForecastRow};

/// Source ids whose last occurrence deserves a highlight.
///
/// An expense qualifies when it is highlight-eligible and shows up more than
/// once in `rows`. Eligibility follows `highlight_last_event`, except that
/// when no expense has it set every expense is eligible.
pub fn finite_expense_ids(expenses: &[Expense], rows: &[ForecastRow]) -> BTreeSet<String> {
    let opted_in: BTreeSet<&str> = expenses
        .iter()
        .filter(|expense| expense.highlight_last_event)
        .map(|expense| expense.id.as_str())
        .collect();
    let eligible: BTreeSet<&str> = if opted_in.is_empty() {
        expenses.iter().map(|expense| expense.id.as_str()).collect()
    } else {
        opted_in
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows.iter().filter(|row| row.is_expense()) {
        if let Some(source) = row.source_id.as_deref() {
            *counts.entry(source).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(source, count)| *count > 1 && eligible.contains(source))
        .map(|(source, _)| source.to_string())
        .collect()
}

/// Latest occurrence date for each expense source.
pub fn last_expense_date_by_source(rows: &[ForecastRow]) -> BTreeMap<String, NaiveDate> {
    let mut last: BTreeMap<String, NaiveDate> = BTreeMap::new();
    for row in rows.iter().filter(|row| row.is_expense()) {
        let Some(source) = row.source_id.as_ref() else {
            continue;
        };
        last.entry(source.clone())
            .and_modify(|date| *date = (*date).max(row.date))
            .or_insert(row.date);
    }
    last
}

/// Id of the final expense row in each month.
pub fn last_expense_row_id_by_month(rows: &[ForecastRow]) -> BTreeMap<String, String> {
    let mut last = BTreeMap::new();
    for row in rows.iter().filter(|row| row.is_expense()) {
        last.insert(row.month_key(), row.id.clone());
    }
    last
}
