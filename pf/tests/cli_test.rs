//! End-to-end tests for the `pf` binary
//!
//! Each test runs in a scratch directory with XDG paths redirected, so no
//! user config is picked up and logs stay out of the real data dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pf").expect("Failed to find pf binary");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env("NO_COLOR", "1");
    cmd
}

// =============================================================================
// tenure
// =============================================================================

#[test]
fn test_tenure_closed_period() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["tenure", "Feb 2022 – Nov 2024"])
        .assert()
        .success()
        .stdout("2Y 10M\n");
}

#[test]
fn test_tenure_present_uses_at_month() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["tenure", "June 2025 – Present", "--at", "2025-06"])
        .assert()
        .success()
        .stdout("1M\n");
}

#[test]
fn test_tenure_prints_one_line_per_period() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["tenure", "2017 - 2020", "garbage", "Jan 2024 — Nov 2024"])
        .assert()
        .success()
        .stdout("3Y 1M\n\n11M\n");
}

#[test]
fn test_tenure_json() {
    let dir = TempDir::new().unwrap();
    let output = pf(&dir)
        .args(["tenure", "--format", "json", "Feb 2022 – Nov 2024", "Smarch 2020 - 2021"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["label"], "2Y 10M");
    assert_eq!(rows[0]["total-months"], 34);
    assert_eq!(rows[1]["label"], "");
    assert!(rows[1]["error"].as_str().unwrap().contains("Smarch"));
}

#[test]
fn test_tenure_rejects_bad_at() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["tenure", "2020 - Present", "--at", "June 2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM"));
}

// =============================================================================
// show
// =============================================================================

#[test]
fn test_show_experience_section() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["show", "--section", "experience"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Professional Journey"))
        .stdout(predicate::str::contains("Fabrikam Analytics"))
        .stdout(predicate::str::contains("[2Y 10M]"));
}

#[test]
fn test_show_accepts_anchor_form() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["show", "--section", "#contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Professional Journey").not());
}

#[test]
fn test_show_rejects_unknown_section() {
    let dir = TempDir::new().unwrap();
    pf(&dir).args(["show", "--section", "blog"]).assert().failure();
}

#[test]
fn test_show_custom_content() {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("me.yml");
    std::fs::write(
        &content,
        r#"
profile:
  name: Test Person
  greeting: Hi
  quote: Ship it
  location: Nowhere
  email: test@example.com
experiences:
  - company: Acme
    period: 2019 - 2020
    role: Engineer
"#,
    )
    .unwrap();

    pf(&dir)
        .args(["show", "--content"])
        .arg(&content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Person"))
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("[1Y 1M]"));
}

#[test]
fn test_show_missing_content_fails() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["show", "--content", "does-not-exist.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load portfolio content"));
}

// =============================================================================
// dial
// =============================================================================

#[test]
fn test_dial_pointer_straight_up_selects_first() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["dial", "-n", "4", "-x", "1", "-y", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("active: 1 of 4"));
}

#[test]
fn test_dial_pointer_right_selects_second() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["dial", "-n", "4", "-x", "15", "-y", "10", "--cx", "10", "--cy", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("angle: 90.0"))
        .stdout(predicate::str::contains("active: 2 of 4"))
        .stdout(predicate::str::contains("progress: 25%"));
}

#[test]
fn test_dial_single_entry_ignores_pointer() {
    let dir = TempDir::new().unwrap();
    let output = pf(&dir)
        .args(["dial", "-n", "1", "-x", "-3", "-y", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["active-index"], 0);
    assert_eq!(value["interactive"], false);
}

#[test]
fn test_dial_zero_entries_fails() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["dial", "-n", "0", "-x", "1", "-y", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one entry"));
}
