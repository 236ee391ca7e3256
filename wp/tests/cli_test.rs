//! CLI tests for the wp binary, using the offline simulated weather provider

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

/// Write data documents and a config pointing at them; returns the config path
fn setup(dir: &Path, templates: Value) -> PathBuf {
    let templates = write(dir, "routines.json", &templates);
    let schedule = write(
        dir,
        "classes.json",
        &json!([{"day": "Monday", "class_name": "Beach Bootcamp", "time": "07:00", "location": "Irvine"}]),
    );
    let students = write(dir, "students.json", &json!(["Ann", "Bo", "Cy", "Dee"]));
    let config = dir.join("workplan.yml");
    fs::write(
        &config,
        format!(
            "default-location: Huntington Beach\nseed: 42\n\
             weather:\n  provider: simulated\n  simulation-seed: 7\n\
             data:\n  templates: {}\n  schedule: {}\n  students: {}\n",
            templates.display(),
            schedule.display(),
            students.display()
        ),
    )
    .unwrap();
    config
}

fn day1() -> Value {
    json!({"1": {"name": "Day1", "exercises": ["Pushups", "Squats"], "duration_minutes": 30, "intensity": "Low"}})
}

#[test]
fn test_plan_prints_summary() {
    let temp = TempDir::new().unwrap();
    let config = setup(temp.path(), day1());

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "plan", "--date", "2025-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Workout Plan - Monday"))
        .stdout(predicate::str::contains("Weather (Irvine):"))
        .stdout(predicate::str::contains("Class Session: Beach Bootcamp"))
        .stdout(predicate::str::contains("Recommendations:"));
}

#[test]
fn test_plan_json_output() {
    let temp = TempDir::new().unwrap();
    let config = setup(temp.path(), day1());

    let output = Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "plan", "--date", "2025-12-02", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["weekday"], "Tuesday");
    assert_eq!(plan["reading"]["location"], "Huntington Beach");
    assert!(plan["session"].is_null());
    assert!(!plan["advisories"].as_array().unwrap().is_empty());
}

#[test]
fn test_missing_routine_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let config = setup(temp.path(), json!({}));

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "plan", "--date", "2025-12-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No routine found for Monday"));
}

#[test]
fn test_roster_and_templates() {
    let temp = TempDir::new().unwrap();
    let config = setup(temp.path(), day1());

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "roster", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beach Bootcamp"));

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "roster", "sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No class scheduled on Sunday"));

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday"))
        .stdout(predicate::str::contains("Day1"));
}

#[test]
fn test_week_overview() {
    let temp = TempDir::new().unwrap();
    let config = setup(temp.path(), day1());

    Command::cargo_bin("wp")
        .unwrap()
        .args(["-c", config.to_str().unwrap(), "week", "--start", "2025-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly Overview (2025-12-01 to 2025-12-07)"))
        .stdout(predicate::str::contains("Saturday"));
}

/// Move the config into `<xdg>/workplan/workplan.yml` and add a log level
fn setup_user_config(xdg: &Path, data_dir: &Path) {
    let config = setup(data_dir, day1());
    let content = fs::read_to_string(&config).unwrap();
    fs::remove_file(&config).unwrap();
    let user_dir = xdg.join("workplan");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("workplan.yml"), format!("log-level: debug\n{}", content)).unwrap();
}

#[test]
fn test_user_config_log_level_applies() {
    let xdg = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    setup_user_config(xdg.path(), data.path());

    Command::cargo_bin("wp")
        .unwrap()
        .current_dir(cwd.path())
        .env("XDG_CONFIG_HOME", xdg.path())
        .env_remove("RUST_LOG")
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day1"))
        .stderr(predicate::str::contains("Logging initialized"));
}

#[test]
fn test_broken_local_config_falls_through_to_user_config() {
    let xdg = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    setup_user_config(xdg.path(), data.path());
    fs::write(cwd.path().join("workplan.yml"), "seed: [not a number\n").unwrap();

    Command::cargo_bin("wp")
        .unwrap()
        .current_dir(cwd.path())
        .env("XDG_CONFIG_HOME", xdg.path())
        .env_remove("RUST_LOG")
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day1"))
        .stderr(predicate::str::contains("Logging initialized"));
}
