use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{domain::Expense, schedule::next_due_on_or_after};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseStatus {
    /// At least one occurrence remains on or after the reference date.
    Active,
    Finished,
}

pub fn expense_status(expense: &Expense, reference: NaiveDate) -> ExpenseStatus {
    if next_due_on_or_after(expense, reference).is_some() {
        ExpenseStatus::Active
    } else {
        ExpenseStatus::Finished
    }
}

/// Expenses split by whether they still have occurrences ahead.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExpenseStatusPartition<'a> {
    pub active: Vec<&'a Expense>,
    pub finished: Vec<&'a Expense>,
}

pub fn partition_expenses_by_status(
    expenses: &[Expense],
    reference: NaiveDate,
) -> ExpenseStatusPartition<'_> {
    let mut partition = ExpenseStatusPartition::default();
    for expense in expenses {
        match expense_status(expense, reference) {
            ExpenseStatus::Active => partition.active.push(expense),
            ExpenseStatus::Finished => partition.finished.push(expense),
        }
    }
    partition
}
