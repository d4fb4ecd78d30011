use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn hms(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hms").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_show_normalizes() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["show", "20", "0", "738"])
        .assert()
        .success()
        .stdout("20:12:18\n");
}

#[test]
fn test_show_negative_fails() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["show", "-5", "33", "20"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("time cannot be negative"));
}

#[test]
fn test_add_and_sub() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["add", "20", "0", "738", "5", "33", "20"])
        .assert()
        .success()
        .stdout("25:45:38\n");

    hms(&home)
        .args(["sub", "20", "0", "738", "5", "33", "20"])
        .assert()
        .success()
        .stdout("14:38:58\n");

    hms(&home)
        .args(["sub", "5", "33", "20", "20", "0", "738"])
        .assert()
        .success()
        .stdout("00:00:00\n");
}

#[test]
fn test_calc_with_symbol() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["calc", "20", "0", "738", "-", "5", "33", "20"])
        .assert()
        .success()
        .stdout("14:38:58\n");

    hms(&home)
        .args(["calc", "1", "2", "3", "%", "0", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operator"));
}

#[test]
fn test_demo_replays_session_then_fails() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .arg("demo")
        .assert()
        .failure()
        .stdout("20:12:18\n05:33:20\n25:45:38\n14:38:58\n00:00:00\n")
        .stderr(predicate::str::contains("time cannot be negative"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let assert = hms(&home)
        .args(["--format", "json", "add", "20", "0", "738", "5", "33", "20"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: Value = serde_json::from_str(stdout.trim()).expect("Output should be JSON");

    assert_eq!(report["display"], "25:45:38");
    assert_eq!(report["operator"], "add");
    assert_eq!(report["total_seconds"], 92738);
    assert_eq!(report["operands"][0]["seconds"], 738);
    assert_eq!(report["operands"][1]["minutes"], 33);
}

#[test]
fn test_config_file_sets_default_format() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".hms-clock");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    hms(&home)
        .args(["show", "1", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\":\"01:02:03\""));

    // Flag wins over config
    hms(&home)
        .args(["show", "1", "2", "3", "--format", "text"])
        .assert()
        .success()
        .stdout("01:02:03\n");
}

#[test]
fn test_config_get() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["config", "get", "logging.level"])
        .assert()
        .success()
        .stdout("warn\n");
}

#[test]
fn test_explicit_config_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "[logging]\nlevel = \"error\"\n").unwrap();

    hms(&home)
        .args(["--config"])
        .arg(&path)
        .args(["config", "get", "logging.level"])
        .assert()
        .success()
        .stdout("error\n");
}

#[test]
fn test_invalid_log_level_flag_fails() {
    let home = TempDir::new().unwrap();
    hms(&home)
        .args(["--log-level", "hms=loud", "show", "1", "2", "3"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid --log-level"));
}

#[test]
fn test_config_list_json() {
    let home = TempDir::new().unwrap();
    let assert = hms(&home)
        .args(["config", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let config: Value = serde_json::from_str(stdout.trim()).expect("Output should be JSON");
    assert_eq!(config["logging"]["level"], "warn");
}
