//! End-to-end checks of the binary's startup error paths.
//!
//! The TUI itself needs a terminal, so only runs that fail before the
//! screen is taken over are exercised here.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with an isolated config that logs into `dir`.
fn run_codexv(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    let log = dir.join("logs").join("codexv.log");
    fs::write(
        &config,
        format!("log_file_path = {:?}\n", log.display().to_string()),
    )
    .expect("write config");

    Command::new(env!("CARGO_BIN_EXE_codexv"))
        .args(args)
        .env("CODEXV_CONFIG", &config)
        .env_remove("CODEXV_TEMPLATE_DIR")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn missing_file_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let output = run_codexv(dir.path(), &["does-not-exist.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does-not-exist.json"),
        "stderr should name the file: {stderr}"
    );
}

#[test]
fn invalid_json_fails_before_tui() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("broken.json");
    fs::write(&data, "{ not json").unwrap();

    let output = run_codexv(dir.path(), &[data.to_str().unwrap()]);

    assert!(!output.status.success());
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "confirm_quit = \"sometimes\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_codexv"))
        .args(["--config", config.to_str().unwrap(), "whatever.json"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.toml"), "stderr: {stderr}");
}
