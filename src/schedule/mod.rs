//! Expansion of paycheck and expense rules into dated forecast events.
//!
//! Every walk is bounded twice: by the horizon end and by
//! [`MAX_RECURRENCE_STEPS`]. Hitting the step cap ends the walk quietly.

pub mod expense;
pub mod income;
pub mod recurrence;

pub use expense::{expense_recurrence, generate_expense_events, next_due_on_or_after};
pub use income::{
    generate_bonus_events, generate_income_events, paycheck_recurrence, BONUS_NAME, PAYCHECK_NAME,
};
pub use recurrence::{Cadence, Occurrence, Occurrences, Recurrence, MAX_RECURRENCE_STEPS};

use crate::{
    domain::{Expense, ForecastEvent, Horizon},
    pay::PaycheckConfig,
};

/// Paychecks, monthly bonuses and expenses for the horizon, unsorted.
pub fn generate_events(
    paycheck: &PaycheckConfig,
    expenses: &[Expense],
    horizon: &Horizon,
) -> Vec<ForecastEvent> {
    let income = generate_income_events(paycheck, horizon);
    let bonuses = generate_bonus_events(&income, paycheck.bonus_amount());
    let mut events = income;
    events.extend(bonuses);
    events.extend(generate_expense_events(expenses, horizon));
    events
}
