use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_valid_email_prints_ok() {
    cargo_bin_cmd!("vaultgate")
        .args(["check-email", "a@b.com"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ok\n"));
}

#[test]
fn test_malformed_email_fails_with_message() {
    cargo_bin_cmd!("vaultgate")
        .args(["check-email", "bad-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email format"));
}

#[test]
fn test_empty_email_fails_with_required_message() {
    cargo_bin_cmd!("vaultgate")
        .args(["check-email", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email is required"));
}

#[test]
fn test_whitespace_is_not_trimmed() {
    cargo_bin_cmd!("vaultgate")
        .args(["check-email", " a@b.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email format"));
}
