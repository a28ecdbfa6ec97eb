use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_offline_provider_starts_at_welcome() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .args(["session", "--provider", "offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session: unauthenticated"))
        .stdout(predicate::str::contains("route: Welcome"));
}

#[test]
fn test_signed_in_identity_starts_at_main_app() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .args(["session", "--signed-in", "u1", "--email", "a@b.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session: authenticated (a@b.com)"))
        .stdout(predicate::str::contains("route: MainApp"));
}

#[test]
fn test_cached_identity_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[identity]\nlatency_ms = 0\n\n[identity.cached]\nid = \"u7\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .arg("session")
        .assert()
        .success()
        .stdout(predicate::str::contains("session: authenticated (u7)"));
}

#[test]
fn test_session_writes_log_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .env("VAULTGATE_LOG", "debug")
        .args(["session", "--provider", "offline"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("logs").join("vaultgate.log")).unwrap();
    assert!(log.contains("mounted screen graph"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[identity]\nprovider = 3\n").unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .arg("session")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_unknown_provider_flag_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vaultgate")
        .env("VAULTGATE_HOME", dir.path())
        .args(["session", "--provider", "firebase"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown identity provider"));
}
