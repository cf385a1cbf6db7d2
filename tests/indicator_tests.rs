use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
mod test_env;

fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".payreq");
    fs::create_dir_all(&config_dir).unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());
    (temp_dir, guard)
}

fn payreq_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("payreq").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd
}

#[test]
fn test_indicator_paid() {
    let (temp_dir, _guard) = setup_test_env();

    payreq_cmd(&temp_dir)
        .args(&["indicator", "Paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:  Paid"))
        .stdout(predicate::str::contains("Color:  blue"))
        .stdout(predicate::str::contains("Filter: status,=,Paid"));
}

#[test]
fn test_indicator_partially_paid() {
    let (temp_dir, _guard) = setup_test_env();

    payreq_cmd(&temp_dir)
        .args(&["indicator", "Partially Paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color:  orange"))
        .stdout(predicate::str::contains("Filter: status,=,Partially Paid"));
}

#[test]
fn test_indicator_failed_is_red() {
    let (temp_dir, _guard) = setup_test_env();

    let output = payreq_cmd(&temp_dir)
        .args(&["indicator", "Failed", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let ind: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(ind["label"], "Failed");
    assert_eq!(ind["color"], "red");
    assert_eq!(ind["filter"], "status,=,Failed");
}

#[test]
fn test_indicator_unknown_status_defaults_to_gray() {
    let (temp_dir, _guard) = setup_test_env();

    payreq_cmd(&temp_dir)
        .args(&["indicator", "Some Future Status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color:  gray"))
        .stdout(predicate::str::contains("Filter: status,=,Some Future Status"));
}

#[test]
fn test_indicator_missing_status() {
    let (temp_dir, _guard) = setup_test_env();

    payreq_cmd(&temp_dir)
        .args(&["indicator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color:  gray"))
        .stdout(predicate::str::contains("Filter: status,=,\n"));
}

#[test]
fn test_statuses_lists_known_set() {
    let (temp_dir, _guard) = setup_test_env();

    let mut assert = payreq_cmd(&temp_dir).args(&["statuses"]).assert().success();
    for status in [
        "Draft",
        "Requested",
        "Initiated",
        "Partially Paid",
        "Paid",
        "Failed",
        "Cancelled",
    ] {
        assert = assert.stdout(predicate::str::contains(status));
    }
}

#[test]
fn test_statuses_json_palette() {
    let (temp_dir, _guard) = setup_test_env();

    let output = payreq_cmd(&temp_dir)
        .args(&["statuses", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 7);

    let color_of = |status: &str| {
        entries
            .iter()
            .find(|e| e["status"] == status)
            .unwrap_or_else(|| panic!("{} missing", status))["color"]
            .clone()
    };
    assert_eq!(color_of("Draft"), "gray");
    assert_eq!(color_of("Requested"), "green");
    assert_eq!(color_of("Initiated"), "green");
    assert_eq!(color_of("Partially Paid"), "orange");
    assert_eq!(color_of("Paid"), "blue");
    assert_eq!(color_of("Failed"), "red");
    assert_eq!(color_of("Cancelled"), "red");

    let paid = entries.iter().find(|e| e["status"] == "Paid").unwrap();
    assert_eq!(paid["filter"], "status,=,Paid");
}
