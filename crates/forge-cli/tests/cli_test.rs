use assert_cmd::Command;
use predicates::prelude::*;

fn combined_output(output: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "--version"] {
        Command::cargo_bin("forge").unwrap()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_help_flag_lists_create() {
    Command::cargo_bin("forge").unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = Command::cargo_bin("forge").unwrap().output().unwrap();
    assert!(output.status.success());
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_unknown_command_exits_one() {
    Command::cargo_bin("forge").unwrap()
        .arg("destroy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("destroy"));
}

#[test]
fn test_create_help_mentions_project_name() {
    Command::cargo_bin("forge").unwrap()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--template-dir"));
}
