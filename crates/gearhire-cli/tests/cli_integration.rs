//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("gearhire").expect("Failed to find gearhire binary")
}

fn write_script(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("session.txt");
    fs::write(&path, body).unwrap();
    path
}

// ============================================================================
// Place Command Tests
// ============================================================================

#[test]
fn test_place_flips_above_near_bottom() {
    cli_cmd()
        .args(["place", "--rect", "750,1160,1200,780", "--popover", "220x92"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top:   650"))
        .stdout(predicate::str::contains("left:  980"))
        .stdout(predicate::str::contains("side:  above"));
}

#[test]
fn test_place_json_output() {
    let output = cli_cmd()
        .args(["place", "--rect", "300,1240,1275,330", "--popover", "240x92", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let placement: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(placement["left"], 1032.0);
    assert_eq!(placement["place_above"], false);
}

#[test]
fn test_place_without_rect_centers() {
    cli_cmd()
        .args(["place", "--region", "hero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("centered fallback"))
        .stdout(predicate::str::contains("left:  520"));
}

#[test]
fn test_place_rejects_bad_rect() {
    cli_cmd()
        .args(["place", "--rect", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("top,left,right,bottom"));
}

#[test]
fn test_place_rejects_unknown_region() {
    cli_cmd()
        .args(["place", "--region", "sidebar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region"));
}

// ============================================================================
// Link Command Tests
// ============================================================================

#[test]
fn test_link_builds_messaging_url() {
    cli_cmd()
        .args(["link", "+52 55 1234 5678", "--text", "Hi, I need chairs & tables"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://wa.me/525512345678?text=Hi%2C+I+need+chairs+%26+tables",
        ));
}

#[test]
fn test_link_without_digits_fails() {
    cli_cmd()
        .args(["link", "call us"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone number"));
}

// ============================================================================
// Simulate Command Tests
// ============================================================================

#[test]
fn test_simulate_session() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "trigger tent 200,100,140,240\n\
         trigger chairs 600,900,940,630\n\
         click tent Tent 10x20\n\
         click chairs\n\
         key Escape\n",
    );

    cli_cmd()
        .arg("simulate")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("open tent top=248"))
        .stdout(predicate::str::contains("open chairs"))
        .stdout(predicate::str::contains("above"))
        .stdout(predicate::str::contains("closed").and(predicate::str::contains("listeners=0")));
}

#[test]
fn test_simulate_json_reports_each_step() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "trigger tent 200,100,140,240\nclick tent\nselect 1\n");

    let output = cli_cmd()
        .arg("simulate")
        .arg(&script)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[1]["open"], "tent");
    assert_eq!(reports[1]["listeners"], 4);
    assert_eq!(reports[2]["open"], serde_json::Value::Null);
    assert_eq!(reports[2]["listeners"], 0);
    assert_eq!(reports[2]["opened_url"], "https://portal.gearhire.example/quote");
}

#[test]
fn test_simulate_traces_steps_when_verbose() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "trigger tent 200,100,140,240\nclick tent\n");

    cli_cmd()
        .env_remove("RUST_LOG")
        .arg("-vv")
        .arg("simulate")
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Replaying step"))
        .stdout(predicate::str::contains("Replaying step").not());
}

#[test]
fn test_simulate_rejects_reserved_owner() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "trigger outside 200,100,140,240\n");

    cli_cmd()
        .arg("simulate")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot name a trigger"));
}

#[test]
fn test_simulate_reports_script_errors_with_line() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "scroll\nwiggle\n");

    cli_cmd()
        .arg("simulate")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("unknown step 'wiggle'"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_init_then_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");

    cli_cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    cli_cmd()
        .args(["config", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("product-grid"))
        .stdout(predicate::str::contains("Ask availability"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, "{}").unwrap();

    cli_cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_check_rejects_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        r#"{ "regions": { "footer": { "popover": { "width": 220, "height": 92 }, "actions": [] } } }"#,
    )
    .unwrap();

    cli_cmd()
        .args(["config", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("footer"));
}

#[test]
fn test_config_show_with_custom_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{ "business_name": "Fiesta Rentals" }"#).unwrap();

    cli_cmd()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fiesta Rentals"));
}

// ============================================================================
// Logs Command Tests
// ============================================================================

#[test]
fn test_simulated_session_is_summarized_from_logs() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");
    let script = write_script(
        &dir,
        "trigger tent 200,100,140,240\nclick tent\nkey Escape\nclick tent\nclick outside\n",
    );

    cli_cmd()
        .arg("--log-dir")
        .arg(&logs)
        .arg("simulate")
        .arg(&script)
        .assert()
        .success();

    cli_cmd()
        .arg("logs")
        .arg(&logs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Popover opens: 2"))
        .stdout(predicate::str::contains("Escape"))
        .stdout(predicate::str::contains("OutsidePointer"));
}

#[test]
fn test_logs_on_empty_dir() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("logs")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 0"));
}
