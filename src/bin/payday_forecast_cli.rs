use std::{env, path::PathBuf, process};

use chrono::NaiveDate;
use colored::Colorize;

use payday_forecast::{
    config::ConfigManager,
    date::{parse_iso_date, to_iso_date},
    errors::ForecastError,
    forecast::{ForecastProfile, ForecastReport, ForecastRequest},
    init_with_level,
    schedule::next_due_on_or_after,
    utils::{
        clock::{Clock, FixedClock, SystemClock},
        persistence,
    },
    view::{banded_rows, partition_expenses_by_status, SpendTrend},
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

struct Invocation {
    command: String,
    operand: Option<PathBuf>,
    today: Option<NaiveDate>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation, ForecastError> {
    let mut command = None;
    let mut operand = None;
    let mut today = None;

    while let Some(arg) = args.next() {
        if arg == "--today" {
            let raw = args.next().unwrap_or_default();
            let date = parse_iso_date(&raw).ok_or(ForecastError::InvalidDate(raw))?;
            today = Some(date);
        } else if command.is_none() {
            command = Some(arg);
        } else if operand.is_none() {
            operand = Some(PathBuf::from(arg));
        }
    }

    let command = command.unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    Ok(Invocation {
        command,
        operand,
        today,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = parse_args(env::args().skip(1))?;
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    init_with_level(&config.log_level);

    let clock: Box<dyn Clock> = match invocation.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();

    match invocation.command.as_str() {
        "sample" => {
            let profile = ForecastProfile::sample(today);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        "config" => {
            println!("{}", manager.path().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "forecast" | "summary" | "metrics" | "status" => {
            let path = invocation.operand.unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let profile = persistence::load_profile(&path)?;
            match invocation.command.as_str() {
                "status" => print_status(&profile, today),
                command => {
                    let report = ForecastRequest::from_config(&profile, &config).run(today);
                    match command {
                        "forecast" => print_forecast(&profile, &report),
                        "summary" => print_summary(&report),
                        _ => print_metrics(&profile, &report),
                    }
                }
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn money(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn balance(value: f64) -> String {
    let text = format!("{:>12}", money(value));
    if value < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

fn print_forecast(profile: &ForecastProfile, report: &ForecastReport) {
    println!(
        "{}",
        format!(
            "Forecast {} to {}",
            to_iso_date(report.horizon.start),
            to_iso_date(report.horizon.end)
        )
        .bold()
    );
    println!("Starting balance {}", money(profile.starting_balance));

    for banded in banded_rows(&report.rows, &profile.expenses) {
        if banded.is_month_start {
            let trend = match banded.trend {
                Some(SpendTrend::Better) => " (spending down)".green().to_string(),
                Some(SpendTrend::Worse) => " (spending up)".yellow().to_string(),
                Some(SpendTrend::Equal) | None => String::new(),
            };
            println!();
            println!("{}{}", banded.month.bold(), trend);
        }

        let row = &banded.row;
        let amount = format!("{:>10}", money(row.signed_amount()));
        let amount = if row.is_income() {
            amount.green().to_string()
        } else {
            amount
        };
        let marker = if banded.is_last_occurrence { " (last)" } else { "" };
        println!(
            "  {}  {:<24} {:<14} {} {}{}",
            to_iso_date(row.date),
            row.name,
            row.category,
            amount,
            balance(row.running_balance),
            marker.dimmed()
        );
    }

    println!();
    println!(
        "{} events, income {}, expenses {}, ending balance {}",
        report.totals.event_count,
        money(report.totals.income),
        money(report.totals.expenses),
        money(report.totals.ending_balance)
    );
}

fn print_summary(report: &ForecastReport) {
    println!("{}", "Monthly balances".bold());
    println!(
        "  {:<8} {:>12} {:>12} {:>12} {:>12}",
        "month", "opening", "spent", "change", "ending"
    );
    for month in &report.months {
        println!(
            "  {:<8} {:>12} {:>12} {:>12} {}",
            month.month,
            money(month.opening_balance),
            money(month.spent),
            money(month.change()),
            balance(month.ending_balance)
        );
    }

    println!();
    println!("{}", "Spending by category".bold());
    for breakdown in report.categories.iter().filter(|b| !b.slices.is_empty()) {
        println!("  {} total {}", breakdown.month, money(breakdown.total()));
        for slice in &breakdown.slices {
            println!("    {:<16} {:>10}", slice.category, money(slice.amount));
        }
    }
}

fn print_metrics(profile: &ForecastProfile, report: &ForecastReport) {
    let pay = &report.breakdown;
    println!(
        "{} ({})",
        "Paycheck".bold(),
        profile.paycheck.pay_frequency.label()
    );
    println!("  gross pay         {:>12}", money(pay.gross_pay));
    println!("  pre-tax           {:>12}", money(pay.pretax_total));
    println!("  taxes             {:>12}", money(pay.taxes_total));
    println!("  post-tax          {:>12}", money(pay.posttax_total));
    println!("  loan repayment    {:>12}", money(pay.loan_repayment_amount));
    println!("  net pay           {:>12}", money(pay.net_pay));

    println!();
    match report.payday {
        Some(metrics) => {
            println!("{} {}", "Next payday".bold(), to_iso_date(metrics.next_payday));
            println!("  balance on payday {}", balance(metrics.balance_on_next_payday));
            println!(
                "  lowest before     {}",
                balance(metrics.lowest_balance_before_next_payday)
            );
            println!(
                "  safe to spend     {}",
                balance(metrics.safe_to_spend_until_next_payday)
            );
        }
        None => println!("{}", "No upcoming paycheck in the forecast.".yellow()),
    }
}

fn print_status(profile: &ForecastProfile, today: NaiveDate) {
    let partition = partition_expenses_by_status(&profile.expenses, today);

    println!("{}", "Active".bold());
    for expense in &partition.active {
        let next = next_due_on_or_after(expense, today)
            .map(to_iso_date)
            .unwrap_or_default();
        println!(
            "  {:<24} {:<14} {:>10}  next {}",
            expense.name,
            expense.category.to_string(),
            money(expense.amount),
            next
        );
    }

    println!("{}", "Finished".bold());
    for expense in &partition.finished {
        println!(
            "  {:<24} {:<14} {:>10}",
            expense.name,
            expense.category.to_string(),
            money(expense.amount)
        );
    }
}

fn print_usage() {
    eprintln!("Usage: payday_forecast_cli [--today YYYY-MM-DD] <command> [profile.json]");
    eprintln!("Commands:");
    eprintln!("  sample             Print a sample profile as JSON");
    eprintln!("  config             Show the config path and active settings");
    eprintln!("  forecast <path>    List every forecast event with running balance");
    eprintln!("  summary <path>     Monthly balances and spending by category");
    eprintln!("  metrics <path>     Paycheck breakdown and next payday metrics");
    eprintln!("  status <path>      Active and finished expenses");
}
