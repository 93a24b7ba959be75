use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn rolodex(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.current_dir(dir)
        .env("ROLODEX_HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_session_saves_and_reloads() {
    let temp_dir = tempfile::tempdir().unwrap();

    rolodex(temp_dir.path())
        .write_stdin("add John 1234567890\nadd jane 9876543210\ngood bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Added contact: john, 1234567890"))
        .stdout(predicate::str::contains("Good bye!"));

    let snapshot = temp_dir.path().join("address_book.json");
    assert!(snapshot.exists());

    rolodex(temp_dir.path())
        .write_stdin("show all\nphone jane\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: john, phones: 1234567890"))
        .stdout(predicate::str::contains("Phone number for jane: 9876543210"));
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    rolodex(temp_dir.path())
        .write_stdin("phone ghost\nadd bob 123\nchange ghost 1234567890\nadd bob 5555555555\nsearch phone 555\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact ghost not found"))
        .stdout(predicate::str::contains(
            "Invalid phone number format. Phone number must contain 10 digits.",
        ))
        .stdout(predicate::str::contains("Contact name: bob, phones: 5555555555"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_empty_directory_and_custom_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    rolodex(temp_dir.path())
        .arg("--file")
        .arg("custom.json")
        .write_stdin("show all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found"));

    assert!(temp_dir.path().join("custom.json").exists());
    assert!(!temp_dir.path().join("address_book.json").exists());
}

#[test]
fn test_page_size_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"page_size": 2, "snapshot_file": "paged.json"}"#,
    )
    .unwrap();

    rolodex(temp_dir.path())
        .write_stdin("add a 1111111111\nadd b 2222222222\nadd c 3333333333\nshow all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- page 1/2 --"))
        .stdout(predicate::str::contains("-- page 2/2 --"));

    assert!(temp_dir.path().join("paged.json").exists());
}

#[test]
fn test_corrupt_snapshot_fails_loudly() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("address_book.json"), "not a snapshot").unwrap();

    rolodex(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));

    let untouched = fs::read_to_string(temp_dir.path().join("address_book.json")).unwrap();
    assert_eq!(untouched, "not a snapshot");
}

#[test]
fn test_unusable_snapshot_path_exits_non_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    rolodex(temp_dir.path())
        .arg("--file")
        .arg("blocker/book.json")
        .write_stdin("add john 1234567890\nexit\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Good bye!").not())
        .stderr(predicate::str::contains("Error:"));
}
