use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("forecast.json");
    std::fs::write(&path, contents).expect("write config");
    path
}

fn target_year() -> i32 {
    Local::now().date_naive().year() + 1
}

#[test]
fn runs_a_forecast_and_writes_the_document() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        &temp,
        r#"{
            "accounts": [
                {"name": "BOK", "opening_balance": 5000.0, "interest_rate": 0.001, "accrual_policy": "simple"}
            ],
            "monthly": [
                {"name": "rent", "amount": -500.0, "day_of_month": 1}
            ]
        }"#,
    );
    let data_file = temp.path().join("financial_data.json");

    Command::cargo_bin("cashcast_cli")
        .expect("binary")
        .arg("--config")
        .arg(&config)
        .arg("--data-file")
        .arg(&data_file)
        .arg("--year")
        .arg(target_year().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("CURRENT COST SETUP"))
        .stdout(predicate::str::contains("SIMULATION COMPLETE"));

    let raw = std::fs::read_to_string(&data_file).expect("document written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("document parses");
    assert_eq!(value["metadata"]["account_count"], 1);
    assert!(value["transactions"].as_array().is_some());
}

#[test]
fn unknown_accrual_policy_fails_naming_the_account() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        &temp,
        r#"{
            "accounts": [
                {"name": "CO", "opening_balance": 3000.0, "interest_rate": 0.036, "accrual_policy": "quarterly"}
            ]
        }"#,
    );

    Command::cargo_bin("cashcast_cli")
        .expect("binary")
        .arg("--config")
        .arg(&config)
        .arg("--year")
        .arg(target_year().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CO"))
        .stderr(predicate::str::contains("quarterly"));
}

#[test]
fn year_before_current_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(&temp, "{}");

    Command::cargo_bin("cashcast_cli")
        .expect("binary")
        .arg("--config")
        .arg(&config)
        .arg("--year")
        .arg("2001")
        .assert()
        .failure()
        .stderr(predicate::str::contains("before the current year"));
}

#[test]
fn missing_config_file_is_an_error() {
    let temp = TempDir::new().expect("temp dir");

    Command::cargo_bin("cashcast_cli")
        .expect("binary")
        .arg("--config")
        .arg(temp.path().join("nope.json"))
        .arg("--year")
        .arg(target_year().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read configuration"));
}
