use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "camelCase")]
/// Closed set of spending categories with `Other` as the catch-all.
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Transportation,
    Groceries,
    Dining,
    Insurance,
    Healthcare,
    Debt,
    Subscriptions,
    Entertainment,
    Personal,
    Savings,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 13] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Transportation,
        ExpenseCategory::Groceries,
        ExpenseCategory::Dining,
        ExpenseCategory::Insurance,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Debt,
        ExpenseCategory::Subscriptions,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Personal,
        ExpenseCategory::Savings,
        ExpenseCategory::Other,
    ];

    /// Stable key carried on forecast events and used for ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Groceries => "groceries",
            ExpenseCategory::Dining => "dining",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Healthcare => "healthcare",
            ExpenseCategory::Debt => "debt",
            ExpenseCategory::Subscriptions => "subscriptions",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Personal => "personal",
            ExpenseCategory::Savings => "savings",
            ExpenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Dining => "Dining",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Debt => "Debt",
            ExpenseCategory::Subscriptions => "Subscriptions",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Personal => "Personal",
            ExpenseCategory::Savings => "Savings",
            ExpenseCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    /// Exactly one occurrence on the first due date.
    #[default]
    #[serde(rename = "none")]
    Once,
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

/// When an expense falls due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ExpenseSchedule {
    /// Explicit list of due dates; no recurrence applies.
    #[serde(rename_all = "camelCase")]
    Variable {
        #[serde(default)]
        due_dates: Vec<NaiveDate>,
    },
    /// A first due date repeated on a fixed cadence.
    #[serde(rename_all = "camelCase")]
    Fixed {
        #[serde(default)]
        first_due_date: Option<NaiveDate>,
        #[serde(default)]
        repeat: Repeat,
        #[serde(default)]
        repeat_count: Option<i32>,
    },
}

impl ExpenseSchedule {
    pub fn once(date: NaiveDate) -> Self {
        ExpenseSchedule::Fixed {
            first_due_date: Some(date),
            repeat: Repeat::Once,
            repeat_count: None,
        }
    }

    pub fn repeating(first_due_date: NaiveDate, repeat: Repeat) -> Self {
        ExpenseSchedule::Fixed {
            first_due_date: Some(first_due_date),
            repeat,
            repeat_count: None,
        }
    }

    pub fn variable(due_dates: Vec<NaiveDate>) -> Self {
        ExpenseSchedule::Variable { due_dates }
    }

    /// Occurrence cap for repeating schedules; `None` means unbounded.
    pub fn occurrence_limit(&self) -> Option<u32> {
        match self {
            ExpenseSchedule::Fixed {
                repeat_count: Some(count),
                ..
            } if *count > 0 => Some(*count as u32),
            _ => None,
        }
    }
}

impl Default for ExpenseSchedule {
    fn default() -> Self {
        ExpenseSchedule::Fixed {
            first_due_date: None,
            repeat: Repeat::Once,
            repeat_count: None,
        }
    }
}

fn default_highlight() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub schedule: ExpenseSchedule,
    #[serde(default = "default_highlight")]
    pub highlight_last_event: bool,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        schedule: ExpenseSchedule,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            category,
            notes: String::new(),
            schedule,
            highlight_last_event: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_repeat_count(mut self, count: i32) -> Self {
        if let ExpenseSchedule::Fixed { repeat_count, .. } = &mut self.schedule {
            *repeat_count = Some(count);
        }
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight_last_event = highlight;
        self
    }

    /// Variable due dates in ascending order; empty for fixed schedules.
    pub fn sorted_due_dates(&self) -> Vec<NaiveDate> {
        match &self.schedule {
            ExpenseSchedule::Variable { due_dates } => {
                let mut dates = due_dates.clone();
                dates.sort();
                dates
            }
            ExpenseSchedule::Fixed { .. } => Vec::new(),
        }
    }
}
