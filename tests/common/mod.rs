#![allow(dead_code)]

use chrono::NaiveDate;
use payday_forecast::{
    domain::{Expense, ExpenseCategory, ExpenseSchedule, Repeat},
    forecast::ForecastProfile,
    pay::{PayFrequency, PaycheckConfig},
};

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Biweekly 1000 paycheck from 2024-01-05, monthly rent and a three-payment gym plan.
pub fn household() -> ForecastProfile {
    ForecastProfile {
        paycheck: PaycheckConfig::net(1000.0, PayFrequency::Biweekly, d(2024, 1, 5)),
        expenses: vec![
            Expense::new(
                "Rent",
                800.0,
                ExpenseCategory::Housing,
                ExpenseSchedule::repeating(d(2024, 1, 1), Repeat::Monthly),
            )
            .with_id("rent"),
            Expense::new(
                "Gym",
                30.0,
                ExpenseCategory::Personal,
                ExpenseSchedule::repeating(d(2024, 1, 10), Repeat::Monthly),
            )
            .with_id("gym")
            .with_repeat_count(3),
        ],
        starting_balance: 500.0,
        minimum_buffer: 100.0,
    }
}
