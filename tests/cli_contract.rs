use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("captionfetch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_reports_crate_name() {
    Command::cargo_bin("captionfetch")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("captionfetch"));
}

#[test]
fn fetch_rejects_input_without_video_id() {
    // Fails during local ID extraction, before any network or config access.
    Command::cargo_bin("captionfetch")
        .unwrap()
        .args(["fetch", "not-a-valid-id!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not extract"));
}

#[test]
fn fetch_rejects_empty_language_list() {
    Command::cargo_bin("captionfetch")
        .unwrap()
        .args(["fetch", "dQw4w9WgXcQ", "--languages", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid language codes"));
}

#[test]
fn fetch_requires_an_argument() {
    Command::cargo_bin("captionfetch")
        .unwrap()
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL_OR_ID"));
}
