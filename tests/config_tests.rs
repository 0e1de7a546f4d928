// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use datakit::app::{run_with, EXIT_FAILURE, EXIT_SUCCESS};
use datakit::config::Settings;
use tempfile::TempDir;

fn run_with_settings(contents: &str, argv: &[&str]) -> (i32, String, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, contents).expect("write settings");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with(argv, &path, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).expect("utf8 stdout"),
        String::from_utf8(err).expect("utf8 stderr"),
    )
}

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();
    assert_eq!(settings.logging.level, "warn");
    assert!(settings.logging.ansi);
}

#[test]
fn test_settings_serialization() {
    let json = serde_json::to_string(&Settings::default()).expect("Should serialize to JSON");
    assert!(json.contains("logging"));
    assert!(json.contains("level"));
}

#[test]
fn test_valid_settings_file() {
    let (code, stdout, _) = run_with_settings(
        r#"{"logging": {"level": "error", "ansi": false}}"#,
        &["datakit", "export", "a.txt"],
    );
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(stdout, "Exporting a.txt as csv\n");
}

#[test]
fn test_malformed_settings_file_reports_error() {
    let (code, stdout, stderr) = run_with_settings("{ nope", &["datakit", "analyze", "a.txt"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: JSON error"));
}

#[test]
fn test_invalid_log_level_reports_error() {
    let (code, stdout, stderr) = run_with_settings(
        r#"{"logging": {"level": "shouty"}}"#,
        &["datakit", "export", "a.txt", "--format", "json"],
    );
    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Configuration error"));
    assert!(stderr.contains("shouty"));
}

#[test]
fn test_settings_not_read_without_command() {
    // Help is printed before settings are consulted.
    let (code, stdout, stderr) = run_with_settings("{ nope", &["datakit"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.contains("Usage:"));
    assert!(stderr.is_empty());
}
