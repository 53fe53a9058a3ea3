use chrono::NaiveDate;

use super::recurrence::{Cadence, Recurrence};
use crate::{
    date::to_iso_date,
    domain::{Expense, ExpenseSchedule, ForecastEvent, Horizon},
};

/// Recurrence rule for a fixed-schedule expense.
///
/// Returns `None` for variable-date expenses and for fixed schedules without
/// a first due date.
pub fn expense_recurrence(expense: &Expense) -> Option<Recurrence> {
    match &expense.schedule {
        ExpenseSchedule::Variable { .. } => None,
        ExpenseSchedule::Fixed {
            first_due_date,
            repeat,
            ..
        } => {
            let anchor = (*first_due_date)?;
            let recurrence = match Cadence::for_repeat(*repeat) {
                Some(cadence) => Recurrence::new(anchor, cadence)
                    .with_limit(expense.schedule.occurrence_limit()),
                None => Recurrence::single(anchor),
            };
            Some(recurrence)
        }
    }
}

/// Next due date on or after `reference`, with no horizon end applied.
pub fn next_due_on_or_after(expense: &Expense, reference: NaiveDate) -> Option<NaiveDate> {
    match &expense.schedule {
        ExpenseSchedule::Variable { .. } => expense
            .sorted_due_dates()
            .into_iter()
            .find(|date| *date >= reference),
        ExpenseSchedule::Fixed { .. } => expense_recurrence(expense)?
            .first_on_or_after(reference)
            .map(|occurrence| occurrence.date),
    }
}

fn events_for_expense(expense: &Expense, horizon: &Horizon) -> Vec<ForecastEvent> {
    let category = expense.category.as_str();
    match &expense.schedule {
        ExpenseSchedule::Variable { .. } => expense
            .sorted_due_dates()
            .into_iter()
            .enumerate()
            .filter(|(_, date)| horizon.contains(*date))
            .map(|(index, date)| {
                ForecastEvent::expense(
                    format!(
                        "expense-{}-{}-variable-{}",
                        expense.id,
                        to_iso_date(date),
                        index
                    ),
                    date,
                    expense.name.clone(),
                    category,
                    expense.amount,
                    expense.id.clone(),
                )
            })
            .collect(),
        ExpenseSchedule::Fixed { .. } => {
            let Some(recurrence) = expense_recurrence(expense) else {
                return Vec::new();
            };
            recurrence
                .between(horizon.start, horizon.end)
                .map(|occurrence| {
                    ForecastEvent::expense(
                        format!(
                            "expense-{}-{}-{}",
                            expense.id,
                            to_iso_date(occurrence.date),
                            occurrence.index
                        ),
                        occurrence.date,
                        expense.name.clone(),
                        category,
                        expense.amount,
                        expense.id.clone(),
                    )
                })
                .collect()
        }
    }
}

/// Expands every expense into dated events inside the horizon.
pub fn generate_expense_events(expenses: &[Expense], horizon: &Horizon) -> Vec<ForecastEvent> {
    let mut events = Vec::new();
    for expense in expenses {
        if !expense.amount.is_finite() {
            tracing::debug!(expense = %expense.id, "skipping expense with non-finite amount");
            continue;
        }
        events.extend(events_for_expense(expense, horizon));
    }
    tracing::debug!(
        expenses = expenses.len(),
        count = events.len(),
        "generated expense events"
    );
    events
}
