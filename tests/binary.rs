//! Integration tests for the loos-options binary

mod common;

use common::loos_options_cmd;
use loos_options::cli::FULLHELP;
use predicates::prelude::*;

#[test]
fn test_no_arguments_prints_usage() {
    loos_options_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("--traj"));
}

#[test]
fn test_fullhelp_writes_exact_text() {
    loos_options_cmd()
        .arg("--fullhelp")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(FULLHELP);
}

#[test]
fn test_fullhelp_ignores_other_flags() {
    loos_options_cmd()
        .args(["--model", "foo.pdb", "--fullhelp", "--skip", "3"])
        .assert()
        .code(0)
        .stderr(FULLHELP);
}

#[test]
fn test_non_integer_skip() {
    loos_options_cmd()
        .args(["--skip", "abc"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'abc'"));
}

#[test]
fn test_unknown_flag() {
    loos_options_cmd()
        .arg("--frames")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_parsed_values_as_yaml() {
    loos_options_cmd()
        .args([
            "--model", "foo.pdb", "--sel", "name CA", "--traj", "a.dcd", "b.dcd", "--skip", "10",
            "--stride", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("model: foo.pdb"))
        .stdout(predicate::str::contains("sel: name CA"))
        .stdout(predicate::str::contains("- a.dcd\n"))
        .stdout(predicate::str::contains("- b.dcd\n"))
        .stdout(predicate::str::contains("skip: 10"))
        .stdout(predicate::str::contains("stride: 2"));
}

#[test]
fn test_defaults_as_yaml() {
    loos_options_cmd()
        .args(["--model", "foo.pdb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sel: all"))
        .stdout(predicate::str::contains("skip: 0"))
        .stdout(predicate::str::contains("stride: 1"));
}

#[test]
fn test_help_lists_groups() {
    loos_options_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Model selection:"))
        .stdout(predicate::str::contains("Trajectory:"))
        .stdout(predicate::str::contains("--fullhelp"));
}

#[test]
fn test_completions() {
    loos_options_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--stride"));
}

#[test]
fn test_negative_skip_as_yaml() {
    loos_options_cmd()
        .args(["--skip", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip: -1"))
        .stdout(predicate::str::contains("fullhelp").not());
}
