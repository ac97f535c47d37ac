#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_all_flags() {
    let mut cmd = Command::cargo_bin("releve-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--schedule"))
        .stdout(predicate::str::contains("--current_user_week"))
        .stdout(predicate::str::contains("--other_username"))
        .stdout(predicate::str::contains("--other_user_week"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn missing_required_flags_is_an_error() {
    let mut cmd = Command::cargo_bin("releve-cli").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn invalid_date_is_rejected_by_the_parser() {
    let mut cmd = Command::cargo_bin("releve-cli").unwrap();
    cmd.args([
        "--schedule",
        "Primary On-Call",
        "--current_user_week",
        "not-a-date",
        "--other_username",
        "bob@example.com",
        "--other_user_week",
        "2024-01-08",
    ])
    .assert()
    .failure();
}

#[test]
fn missing_token_fails_before_any_network_call() {
    let mut cmd = Command::cargo_bin("releve-cli").unwrap();
    cmd.env_remove("API_TOKEN")
        .args([
            "--schedule",
            "Primary On-Call",
            "--current_user_week",
            "2024-01-01",
            "--other_username",
            "bob@example.com",
            "--other_user_week",
            "2024-01-08",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_TOKEN"));
}
