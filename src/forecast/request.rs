use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    builder::{build_forecast, ForecastTotals},
    metrics::{compute_next_payday_metrics, PaydayMetrics},
};
use crate::{
    config::Config,
    date::add_days,
    domain::{Expense, ExpenseCategory, ExpenseSchedule, ForecastRow, Horizon, Repeat},
    pay::{
        compute_net_pay_breakdown, DeductionLine, GrossInput, NetPayBreakdown, PayFrequency,
        PaycheckConfig, PaycheckInput,
    },
    schedule::generate_events,
    view::{
        monthly_balance_summaries, monthly_category_slices, MonthlyCategoryBreakdown,
        MonthlySummary,
    },
};

/// Snapshot of everything the user has entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProfile {
    #[serde(default)]
    pub paycheck: PaycheckConfig,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub starting_balance: f64,
    #[serde(default)]
    pub minimum_buffer: f64,
}

impl ForecastProfile {
    /// Demo household anchored on `today`, with stable expense ids.
    pub fn sample(today: NaiveDate) -> Self {
        let paycheck = PaycheckConfig {
            input: PaycheckInput::Calculate {
                gross: GrossInput::Direct {
                    gross_amount: Some(2400.0),
                },
                pretax_deductions: vec![DeductionLine::percent("401k", 5.0)],
                taxes_withheld: vec![
                    DeductionLine::percent("Federal", 12.0),
                    DeductionLine::fixed("State", 95.0),
                ],
                posttax_deductions: vec![DeductionLine::fixed("Dental", 12.5)],
                loan_repayment: 40.0,
            },
            pay_frequency: PayFrequency::Biweekly,
            next_pay_date: Some(add_days(today, 4)),
            monthly_bonus: Some(150.0),
        };

        let monthly =
            |offset| ExpenseSchedule::repeating(add_days(today, offset), Repeat::Monthly);
        let expenses = vec![
            Expense::new("Rent", 1450.0, ExpenseCategory::Housing, monthly(1)).with_id("rent"),
            Expense::new(
                "Groceries",
                110.0,
                ExpenseCategory::Groceries,
                ExpenseSchedule::repeating(add_days(today, 2), Repeat::Weekly),
            )
            .with_id("groceries")
            .with_highlight(false),
            Expense::new("Phone", 65.0, ExpenseCategory::Utilities, monthly(10)).with_id("phone"),
            Expense::new("Streaming", 15.99, ExpenseCategory::Subscriptions, monthly(7))
                .with_id("streaming")
                .with_highlight(false),
            Expense::new("Car loan", 320.0, ExpenseCategory::Debt, monthly(14))
                .with_id("car-loan")
                .with_repeat_count(6),
            Expense::new(
                "Car insurance",
                780.0,
                ExpenseCategory::Insurance,
                ExpenseSchedule::repeating(add_days(today, 40), Repeat::Yearly),
            )
            .with_id("car-insurance"),
            Expense::new(
                "Concert tickets",
                120.0,
                ExpenseCategory::Entertainment,
                ExpenseSchedule::once(add_days(today, 20)),
            )
            .with_id("concert"),
            Expense::new(
                "Electricity",
                90.0,
                ExpenseCategory::Utilities,
                ExpenseSchedule::variable(vec![
                    add_days(today, 73),
                    add_days(today, 12),
                    add_days(today, 43),
                ]),
            )
            .with_id("electricity"),
        ];

        Self {
            paycheck,
            expenses,
            starting_balance: 1800.0,
            minimum_buffer: 250.0,
        }
    }
}

/// Everything derived from one profile for one "today".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub horizon: Horizon,
    pub breakdown: NetPayBreakdown,
    pub rows: Vec<ForecastRow>,
    pub totals: ForecastTotals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payday: Option<PaydayMetrics>,
    pub months: Vec<MonthlySummary>,
    pub categories: Vec<MonthlyCategoryBreakdown>,
}

impl ForecastReport {
    /// Date of the first paycheck in the forecast, if any.
    pub fn next_payday(&self) -> Option<NaiveDate> {
        self.payday.map(|metrics| metrics.next_payday)
    }
}

/// Recomputes a forecast from a profile snapshot; holds no state between runs.
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest<'a> {
    profile: &'a ForecastProfile,
    horizon_months: u32,
}

impl<'a> ForecastRequest<'a> {
    pub fn new(profile: &'a ForecastProfile, horizon_months: u32) -> Self {
        Self {
            profile,
            horizon_months,
        }
    }

    pub fn from_config(profile: &'a ForecastProfile, config: &Config) -> Self {
        Self::new(profile, config.horizon_months)
    }

    pub fn horizon(&self, today: NaiveDate) -> Horizon {
        Horizon::months_from(today, self.horizon_months)
    }

    pub fn run(&self, today: NaiveDate) -> ForecastReport {
        let profile = self.profile;
        let horizon = self.horizon(today);
        let events = generate_events(&profile.paycheck, &profile.expenses, &horizon);
        let rows = build_forecast(&events, profile.starting_balance);

        let payday = rows
            .iter()
            .find(|row| row.is_income())
            .map(|row| {
                compute_next_payday_metrics(
                    &rows,
                    row.date,
                    profile.minimum_buffer,
                    profile.starting_balance,
                )
            });
        let totals = ForecastTotals::from_rows(&rows, profile.starting_balance);
        let months = monthly_balance_summaries(&rows, profile.starting_balance);
        let categories = monthly_category_slices(&rows, horizon.start);

        tracing::info!(
            start = %horizon.start,
            end = %horizon.end,
            rows = rows.len(),
            ending_balance = totals.ending_balance,
            "forecast computed"
        );

        ForecastReport {
            horizon,
            breakdown: compute_net_pay_breakdown(&profile.paycheck),
            rows,
            totals,
            payday,
            months,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn profile() -> ForecastProfile {
        ForecastProfile {
            paycheck: PaycheckConfig::net(1200.0, PayFrequency::Biweekly, d(2024, 1, 12))
                .with_bonus(100.0),
            expenses: vec![Expense::new(
                "Rent",
                1500.0,
                ExpenseCategory::Housing,
                ExpenseSchedule::repeating(d(2024, 1, 1), Repeat::Monthly),
            )
            .with_id("rent")],
            starting_balance: 2000.0,
            minimum_buffer: 250.0,
        }
    }

    #[test]
    fn run_builds_rows_and_metrics() {
        let profile = profile();
        let report = ForecastRequest::new(&profile, 12).run(d(2024, 1, 1));

        assert_eq!(report.horizon.end, d(2025, 1, 1));
        assert_eq!(report.rows[0].id, "expense-rent-2024-01-01-0");
        assert_eq!(report.rows[0].running_balance, 500.0);
        assert_eq!(report.next_payday(), Some(d(2024, 1, 12)));

        let payday = report.payday.expect("paychecks present");
        assert_eq!(payday.balance_on_next_payday, 1700.0);
        assert_eq!(payday.lowest_balance_before_next_payday, 500.0);
        assert_eq!(payday.safe_to_spend_until_next_payday, 250.0);

        assert_eq!(report.categories.len(), 12);
        assert_eq!(report.months.first().map(|m| m.month.as_str()), Some("2024-01"));
        assert_eq!(report.totals.event_count, report.rows.len());
    }

    #[test]
    fn run_without_paychecks_has_no_payday() {
        let mut profile = profile();
        profile.paycheck.next_pay_date = None;
        let report = ForecastRequest::new(&profile, 3).run(d(2024, 1, 1));
        assert!(report.payday.is_none());
        assert!(report.rows.iter().all(|row| row.is_expense()));
        assert_eq!(report.breakdown.net_pay, 1200.0);
    }

    #[test]
    fn sample_profile_forecasts_cleanly() {
        let today = d(2024, 3, 10);
        let profile = ForecastProfile::sample(today);
        let report = ForecastRequest::new(&profile, 6).run(today);

        assert_eq!(report.breakdown.gross_pay, 2400.0);
        assert_eq!(report.breakdown.net_pay, 1844.5);
        assert_eq!(report.next_payday(), Some(d(2024, 3, 14)));
        let count_for = |id: &str| {
            report
                .rows
                .iter()
                .filter(|row| row.source_id.as_deref() == Some(id))
                .count()
        };
        assert_eq!(count_for("car-loan"), 6);
        assert_eq!(count_for("concert"), 1);
    }

    #[test]
    fn profile_json_round_trips() {
        let profile = profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ForecastProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
