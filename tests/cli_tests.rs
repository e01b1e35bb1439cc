use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("berth-cli-test-{nanos}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn help_lists_the_commands() {
    AssertCommand::cargo_bin("berth")
        .expect("berth binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("remove")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn check_config_accepts_a_valid_file() {
    let toml = concat!(
        "[runtime]\n",
        "api_url = \"http://127.0.0.1:7123\"\n",
        "\n",
        "[logging]\n",
        "level = \"info\"\n",
        "format = \"pretty\"\n",
    );

    let path = write_temp_config(toml);
    let output = Command::new(env!("CARGO_BIN_EXE_berth"))
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run berth");
    let _ = fs::remove_file(&path);

    assert!(
        output.status.success(),
        "expected success.\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let toml = concat!(
        "[runtime]\n",
        "api_url = \"not a url\"\n",
        "\n",
        "[logging]\n",
        "level = \"info\"\n",
        "format = \"pretty\"\n",
    );

    let path = write_temp_config(toml);
    let output = Command::new(env!("CARGO_BIN_EXE_berth"))
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run berth");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");

    // Check both stdout and stderr for the error message
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("runtime.api_url"),
        "Expected error message about invalid config.\nstdout: {stdout}\nstderr: {stderr}"
    );
}
