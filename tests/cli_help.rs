use std::process::Command;

#[test]
fn test_help_mentions_github_output() {
    let bin = env!("CARGO_BIN_EXE_store-matrix");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("$GITHUB_OUTPUT"),
        "help output should mention GITHUB_OUTPUT; got:\n{}",
        stdout
    );
    assert!(stdout.contains("[GROUP]"), "got:\n{}", stdout);
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_store-matrix");

    let output = Command::new(bin).arg("--bogus").output().unwrap();

    assert!(!output.status.success());
}
