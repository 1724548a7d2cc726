// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the navstack CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a navstack command isolated from the user's config file
fn navstack(config_dir: &TempDir) -> Command {
    let config_path = config_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("navstack").unwrap();
    cmd.env("NAVSTACK_CONFIG", &config_path)
        .env_remove("NAVSTACK_MAX_DEPTH")
        .arg("--no-color");
    cmd
}

#[test]
fn test_replay_evicts_oldest() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .args(["replay", "-d", "3", "push:1", "push:2", "push:3", "push:4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stack [3/3]: 4, 3, 2"));
}

#[test]
fn test_replay_prints_outputs_in_order() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .args(["replay", "peek", "push:root", "push:child", "len", "pop", "pop", "pop", "empty"])
        .assert()
        .success()
        .stdout("(none)\n2\nchild\nroot\n(none)\ntrue\nstack [0/10]: (empty)\n");
}

#[test]
fn test_replay_uses_configured_depth() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "max_depth = 2\n").unwrap();

    navstack(&dir)
        .args(["replay", "push:a", "push:b", "push:c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stack [2/2]: c, b"));
}

#[test]
fn test_replay_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "max_depth = 2\n").unwrap();

    navstack(&dir)
        .env("NAVSTACK_MAX_DEPTH", "4")
        .args(["replay", "push:a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stack [1/4]: a"));
}

#[test]
fn test_replay_from_script_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("history.txt");
    fs::write(&script, "# open views\npush:force-graph\npush:radial-tree\n\npop\n").unwrap();

    navstack(&dir)
        .args(["replay", "--file"])
        .arg(&script)
        .arg("push:detail")
        .assert()
        .success()
        .stdout("radial-tree\nstack [2/10]: detail, force-graph\n");
}

#[test]
fn test_replay_json_output() {
    let dir = TempDir::new().unwrap();

    let output = navstack(&dir)
        .args(["--json", "replay", "-d", "2", "push:a", "push:b", "push:c", "peek"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["max_depth"], 2);
    assert_eq!(report["stack"], serde_json::json!(["c", "b"]));
    assert_eq!(report["outputs"][0]["op"], "peek");
    assert_eq!(report["outputs"][0]["value"], "c");
}

#[test]
fn test_replay_rejects_unknown_operation() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .args(["replay", "push:a", "rewind"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation `rewind` at position 2"));
}

#[test]
fn test_replay_rejects_zero_depth() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .args(["replay", "-d", "0", "push:a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth must be greater than zero"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .env("NAVSTACK_CONFIG", dir.path().join("absent.toml"))
        .args(["replay", "push:a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    navstack(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("navstack"));
}
