mod common;

use common::d;
use payday_forecast::{
    date::add_months,
    domain::{Expense, ExpenseCategory, ExpenseSchedule, ForecastEvent, Horizon, Repeat},
    forecast::{build_forecast, compute_next_payday_metrics},
    pay::{
        compute_gross_pay_from_hourly, compute_net_pay_breakdown, GrossInput, PayFrequency,
        PaycheckConfig, PaycheckInput,
    },
    schedule::{generate_expense_events, Cadence, Recurrence, MAX_RECURRENCE_STEPS},
    view::monthly_category_slices,
};

#[test]
fn net_mode_breakdown_only_carries_net_pay() {
    let config = PaycheckConfig::net(1234.567, PayFrequency::Weekly, d(2024, 1, 5));
    let breakdown = compute_net_pay_breakdown(&config);

    assert_eq!(breakdown.net_pay, 1234.57);
    assert_eq!(breakdown.gross_pay, 0.0);
    assert_eq!(breakdown.pretax_total, 0.0);
    assert_eq!(breakdown.taxes_total, 0.0);
    assert_eq!(breakdown.posttax_total, 0.0);
    assert_eq!(breakdown.loan_repayment_amount, 0.0);
    assert_eq!(breakdown.total_withheld_deducted, 0.0);
}

#[test]
fn negative_gross_makes_every_derived_field_nan() {
    let config = PaycheckConfig {
        input: PaycheckInput::Calculate {
            gross: GrossInput::Direct {
                gross_amount: Some(-50.0),
            },
            pretax_deductions: Vec::new(),
            taxes_withheld: Vec::new(),
            posttax_deductions: Vec::new(),
            loan_repayment: 25.0,
        },
        ..PaycheckConfig::default()
    };
    let breakdown = compute_net_pay_breakdown(&config);

    assert!(breakdown.pretax_total.is_nan());
    assert!(breakdown.taxes_total.is_nan());
    assert!(breakdown.posttax_total.is_nan());
    assert!(breakdown.loan_repayment_amount.is_nan());
    assert!(breakdown.total_withheld_deducted.is_nan());
    assert!(breakdown.net_pay.is_nan());
    assert!(breakdown.net().is_err());
}

#[test]
fn month_end_clamps_to_shorter_months() {
    assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
    assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
}

#[test]
fn semimonthly_hourly_gross() {
    let gross =
        compute_gross_pay_from_hourly(PayFrequency::Semimonthly, Some(20.0), Some(40.0)).unwrap();
    assert_eq!(gross, 1733.33);
}

#[test]
fn weekly_expense_over_a_year_is_bounded() {
    let horizon = Horizon::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap();
    let weekly = Expense::new(
        "Coffee",
        4.5,
        ExpenseCategory::Dining,
        ExpenseSchedule::repeating(d(2024, 1, 1), Repeat::Weekly),
    );

    let events = generate_expense_events(&[weekly], &horizon);
    assert!(events.len() <= 53);
    assert_eq!(events.len(), 53);
}

#[test]
fn zero_step_cadence_terminates_at_cap() {
    let stuck = Recurrence::new(d(2024, 1, 1), Cadence::Days(0));
    assert_eq!(stuck.occurrences().count(), MAX_RECURRENCE_STEPS);
    assert_eq!(
        stuck.between(d(2024, 1, 1), d(2024, 12, 31)).count(),
        MAX_RECURRENCE_STEPS
    );
}

#[test]
fn payday_metrics_worked_example() {
    let events = vec![
        ForecastEvent::expense(
            "expense-a".into(),
            d(2024, 3, 2),
            "Groceries",
            "groceries",
            50.0,
            "a",
        ),
        ForecastEvent::income("income-0".into(), d(2024, 3, 5), "Paycheck", 30.0),
    ];
    let rows = build_forecast(&events, 100.0);
    let metrics = compute_next_payday_metrics(&rows, d(2024, 3, 5), 20.0, 100.0);

    assert_eq!(metrics.balance_on_next_payday, 80.0);
    assert_eq!(metrics.lowest_balance_before_next_payday, 50.0);
    assert_eq!(metrics.safe_to_spend_until_next_payday, 30.0);
}

#[test]
fn category_slices_cover_twelve_months_regardless_of_rows() {
    let slices = monthly_category_slices(&[], d(2023, 11, 15));
    let months: Vec<_> = slices.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "2023-11");
    assert_eq!(months[2], "2024-01");
    assert_eq!(months[11], "2024-10");
}

#[test]
fn schedule_modes_ignore_each_others_fields() {
    let horizon = Horizon::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap();

    let variable: Expense = serde_json::from_str(
        r#"{
            "id": "vet",
            "name": "Vet",
            "amount": 80.0,
            "category": "healthcare",
            "schedule": {
                "mode": "variable",
                "dueDates": ["2024-06-01", "2024-02-01"],
                "firstDueDate": "2024-01-01",
                "repeat": "weekly"
            }
        }"#,
    )
    .unwrap();
    let dates: Vec<_> = generate_expense_events(&[variable], &horizon)
        .into_iter()
        .map(|event| event.date)
        .collect();
    assert_eq!(dates, vec![d(2024, 2, 1), d(2024, 6, 1)]);

    let fixed: Expense = serde_json::from_str(
        r#"{
            "id": "tax",
            "name": "Property tax",
            "amount": 900.0,
            "category": "housing",
            "schedule": {
                "mode": "fixed",
                "firstDueDate": "2024-04-15",
                "repeat": "yearly",
                "dueDates": ["2024-01-02", "2024-01-03"]
            }
        }"#,
    )
    .unwrap();
    let dates: Vec<_> = generate_expense_events(&[fixed], &horizon)
        .into_iter()
        .map(|event| event.date)
        .collect();
    assert_eq!(dates, vec![d(2024, 4, 15)]);
}
