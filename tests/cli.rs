use assert_cmd::Command;
use predicates::prelude::*;

fn zebra() -> Command {
    Command::cargo_bin("zebra").unwrap()
}

#[test]
fn test_help_lists_stripe_commands() {
    zebra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("striping.enable"))
        .stdout(predicate::str::contains("striping.disable"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn test_version() {
    zebra()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("zebra "));
}

#[test]
fn test_unknown_theme_is_rejected() {
    zebra()
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown theme 'solarized'"));
}

#[test]
fn test_unknown_encoding_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "one\ntwo\n").unwrap();

    zebra()
        .arg("--encoding")
        .arg("klingon")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding"));
}

#[test]
fn test_extra_arguments_are_rejected() {
    zebra()
        .args(["a.txt", "b.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected arguments"));
}
