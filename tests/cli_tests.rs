//! Command-line tests for the `pomodoro` binary.
//!
//! Every test points `--data-dir` at a temporary directory so the user's
//! real preferences are never touched. The interactive `run` command needs
//! a terminal and is not exercised here.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomodoro(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.env_remove("POMODORO_TERM_HOME")
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("pomodoro")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("layout"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_settings_show_defaults() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus:       25 min"))
        .stdout(predicate::str::contains("Short break: 5 min"))
        .stdout(predicate::str::contains("Long break:  15 min"));
}

#[test]
fn test_settings_set_then_show() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["settings", "set", "--focus", "50", "--sound", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    pomodoro(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus:       50 min"))
        .stdout(predicate::str::contains("Sound:       off"))
        .stdout(predicate::str::contains("Vibration:   on"));
}

#[test]
fn test_settings_set_without_values_fails() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["settings", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_settings_set_out_of_range_rejected() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["settings", "set", "--focus", "0"])
        .assert()
        .failure();
    assert!(!dir.path().join("storage.json").exists());
}

#[test]
fn test_settings_reset() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["settings", "set", "--long-break", "30"])
        .assert()
        .success();
    pomodoro(&dir).args(["settings", "reset"]).assert().success();

    pomodoro(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Long break:  15 min"));
}

#[test]
fn test_layout_show_and_set() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout: portrait"));

    pomodoro(&dir)
        .args(["layout", "landscape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout set to landscape"));

    pomodoro(&dir)
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout: landscape"));
}

#[test]
fn test_data_dir_from_env() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("pomodoro")
        .unwrap()
        .env("POMODORO_TERM_HOME", dir.path())
        .args(["layout", "landscape"])
        .assert()
        .success();
    assert!(dir.path().join("storage.json").exists());
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("pomodoro")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}
