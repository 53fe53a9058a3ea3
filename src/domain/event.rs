use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::month_key;

/// Category label carried by paycheck and bonus events.
pub const INCOME_CATEGORY: &str = "income";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Income,
    Expense,
}

/// A single dated credit or debit produced by the schedule generators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEvent {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub name: String,
    pub category: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl ForecastEvent {
    pub fn income(id: String, date: NaiveDate, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            date,
            kind: EventKind::Income,
            name: name.into(),
            category: INCOME_CATEGORY.to_string(),
            amount,
            source_id: None,
        }
    }

    pub fn expense(
        id: String,
        date: NaiveDate,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            kind: EventKind::Expense,
            name: name.into(),
            category: category.into(),
            amount,
            source_id: Some(source_id.into()),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EventKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EventKind::Expense
    }

    /// Signed effect on the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EventKind::Income => self.amount,
            EventKind::Expense => -self.amount,
        }
    }

    pub fn month_key(&self) -> String {
        month_key(self.date)
    }
}

/// A forecast event together with the balance right after it posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    #[serde(flatten)]
    pub event: ForecastEvent,
    pub running_balance: f64,
}

impl std::ops::Deref for ForecastRow {
    type Target = ForecastEvent;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}
