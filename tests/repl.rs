//! End-to-end tests driving the mysh binary over a pipe.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn mysh() -> assert_cmd::Command {
    cargo_bin_cmd!("mysh")
}

#[test]
fn help_then_failed_cd_then_exit() {
    // The loop must survive the failed cd and only stop at `exit`.
    mysh()
        .write_stdin("help\ncd /nonexistent-xyz\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("built in"))
        .stderr(predicate::str::contains("mysh: cd: /nonexistent-xyz"));
}

#[test]
fn end_of_input_terminates_like_exit() {
    mysh().write_stdin("").assert().success();
}

#[test]
fn exit_ignores_trailing_arguments() {
    mysh().write_stdin("exit now\n").assert().success();
}

#[test]
fn blank_and_delimiter_only_lines_are_noops() {
    mysh()
        .write_stdin("\n   \t \nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_command_is_reported_and_loop_survives() {
    mysh()
        .write_stdin("mysh_no_such_program_xyz\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("mysh_no_such_program_xyz"));
}

#[test]
fn external_command_output_is_inherited() {
    mysh()
        .write_stdin("echo external-says-hi\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("external-says-hi"));
}

#[test]
fn greeting_is_printed_once_at_startup() {
    mysh()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to mysh"));
}
