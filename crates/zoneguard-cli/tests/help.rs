use assert_cmd::Command;

/// Helper to get a Command for the zoneguard binary.
#[allow(deprecated)]
fn zoneguard_cmd() -> Command {
    Command::cargo_bin("zoneguard").unwrap()
}

#[test]
fn help_works() {
    zoneguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_mentions_edges() {
    use predicates::prelude::*;
    zoneguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--edges"));
}
