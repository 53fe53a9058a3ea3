use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("payday_forecast_cli").unwrap();
    cmd.env("PAYDAY_FORECAST_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write_sample(home: &TempDir) -> std::path::PathBuf {
    let output = cli(home)
        .args(["--today", "2024-03-10", "sample"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let path = home.path().join("profile.json");
    fs::write(&path, output.stdout).unwrap();
    path
}

#[test]
fn sample_prints_a_loadable_profile() {
    let home = tempdir().unwrap();
    cli(&home)
        .args(["sample", "--today", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nextPayDate\": \"2024-03-14\""))
        .stdout(predicate::str::contains("\"mode\": \"calculate\""));
}

#[test]
fn forecast_lists_paychecks_and_expenses() {
    let home = tempdir().unwrap();
    let profile = write_sample(&home);

    cli(&home)
        .arg("forecast")
        .arg(&profile)
        .args(["--today", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forecast 2024-03-10 to 2025-03-10"))
        .stdout(predicate::str::contains("2024-03-14  Paycheck"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("(last)"));
}

#[test]
fn metrics_and_summary_render() {
    let home = tempdir().unwrap();
    let profile = write_sample(&home);

    cli(&home)
        .arg("metrics")
        .arg(&profile)
        .args(["--today", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck (Every two weeks)"))
        .stdout(predicate::str::contains("Next payday 2024-03-14"))
        .stdout(predicate::str::contains("1844.50"));

    cli(&home)
        .arg("summary")
        .arg(&profile)
        .args(["--today", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly balances"))
        .stdout(predicate::str::contains("2024-03"));
}

#[test]
fn status_moves_past_one_offs_to_finished() {
    let home = tempdir().unwrap();
    let profile = write_sample(&home);

    cli(&home)
        .arg("status")
        .arg(&profile)
        .args(["--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"Finished\n(.*\n)*\s+Concert tickets\s+Entertainment")
                .unwrap(),
        )
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn config_reports_defaults_under_home() {
    let home = tempdir().unwrap();
    cli(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("\"horizonMonths\": 12"));
}

#[test]
fn invalid_today_is_reported() {
    let home = tempdir().unwrap();
    cli(&home)
        .args(["--today", "2024-02-30", "sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid date: 2024-02-30"));
}

#[test]
fn missing_profile_fails_cleanly() {
    let home = tempdir().unwrap();
    cli(&home)
        .args(["forecast", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unknown_command_prints_usage() {
    let home = tempdir().unwrap();
    cli(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: payday_forecast_cli"));
}
