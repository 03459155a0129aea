//! The binary, driven the way a user would drive it.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn catbot(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catbot").unwrap();
    cmd.env("HOME", temp_dir.path())
        .env_remove("CATBOT_DATA_FILE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn runs_argument_lines_and_persists() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("tasks.txt");

    catbot(&temp_dir)
        .arg("--data-file")
        .arg(&data_file)
        .args(["todo x", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Got it. I've added this task:"))
        .stdout(predicate::str::contains("1. [T][ ] x"))
        .stdout(predicate::str::contains("Hello!").not());

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "todo x\n");
}

#[test]
fn reloads_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("tasks.txt");

    catbot(&temp_dir)
        .arg("--data-file")
        .arg(&data_file)
        .args(["todo read book", "deadline submit report /by 2024-12-01T10:00", "mark 1"])
        .assert()
        .success();

    catbot(&temp_dir)
        .arg("--data-file")
        .arg(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T][✓] read book"))
        .stdout(predicate::str::contains(
            "2. [D][ ] submit report by Dec 1, 2024, 10:00 AM",
        ));
}

#[test]
fn failed_line_sets_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("tasks.txt");

    catbot(&temp_dir)
        .arg("--data-file")
        .arg(&data_file)
        .args(["delete 1", "todo still runs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("There's no task 1"))
        .stdout(predicate::str::contains("todo still runs").not())
        .stdout(predicate::str::contains("[T][ ] still runs"));
}

#[test]
fn data_file_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("from-env.txt");

    catbot(&temp_dir)
        .env("CATBOT_DATA_FILE", &data_file)
        .arg("todo via env")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "todo via env\n");
}

#[test]
fn default_data_file_lives_under_home() {
    let temp_dir = TempDir::new().unwrap();

    catbot(&temp_dir).arg("todo at home").assert().success();

    let stored = temp_dir.path().join(".catbot").join("tasks.txt");
    assert_eq!(std::fs::read_to_string(stored).unwrap(), "todo at home\n");
}

#[test]
fn interactive_session_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("tasks.txt");

    catbot(&temp_dir)
        .arg("--data-file")
        .arg(&data_file)
        .write_stdin("todo read book\nmark 1\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello! I'm catbot."))
        .stdout(predicate::str::contains("Nice! I've marked this task as done:"))
        .stdout(predicate::str::ends_with("Bye. Hope to see you again soon!\n"));

    assert_eq!(
        std::fs::read_to_string(&data_file).unwrap(),
        "todo read book\nmark last\n"
    );
}

#[test]
fn broken_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(&config, "general: [not, a, map]\n").unwrap();

    catbot(&temp_dir)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("Config error"));
}
