use assert_cmd::cargo; // handy crate for testing CLIs
use std::fs;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bare_invocation_prints_usage() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn missing_diff_file_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("diff.txt");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.args(["--no-model", "--file"])
        .arg(&missing)
        .arg("documentation")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("does not exist"));
}

#[test]
fn write_a_function_succeeds_without_a_diff_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("diff.txt");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.args(["--no-model", "--file"])
        .arg(&missing)
        .arg("write-a-function")
        .assert()
        .success()
        .stdout(predicates::str::contains("Response from Model:"));
}

#[test]
fn release_notes_writes_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let diff = dir.path().join("diff.txt");
    fs::write(&diff, "diff --git a/x b/x\n+foo\n").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(dir.path())
        .args(["--no-model", "--file"])
        .arg(&diff)
        .arg("release-notes")
        .assert()
        .success()
        .stdout(predicates::str::contains("The generated release notes are:"));

    let notes = fs::read_to_string(dir.path().join("release_notes.md")).unwrap();
    assert!(notes.contains("[DUMMY RESPONSE]"));
}

#[test]
fn real_backend_requires_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let diff = dir.path().join("diff.txt");
    fs::write(&diff, "+foo\n").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.env_remove("VERTEX_ACCESS_TOKEN")
        .env_remove("GOOGLE_CLOUD_PROJECT")
        .arg("--file")
        .arg(&diff)
        .arg("optimize")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("VERTEX_ACCESS_TOKEN"));
}
