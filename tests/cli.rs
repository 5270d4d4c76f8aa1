//! CLI Contract Tests
//!
//! Drive the built binary the way a workflow step would.

use std::io::Write;
use std::process::{Command, Output};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pluginci-cli"))
        .args(args)
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("CI_COMMIT_MESSAGE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn pluginci-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_github_output_and_success_exit() {
    let out = cli(&["--event-name", "push", "--commit-message", "feat: x [ci-build]"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "should-run=true\n\
         platforms=[\"linux\", \"windows\", \"macos\"]\n\
         validation-formats=[]\n\
         trigger-reason=General [ci-build] tag found\n"
    );
}

#[test]
fn cli_no_tags_exits_one() {
    let out = cli(&["--event-name", "pull_request", "--commit-message", "feat: no tag"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("should-run=false\n"));
}

#[test]
fn cli_message_defaults_to_empty() {
    let out = cli(&["--event-name", "push"]);
    assert_eq!(out.status.code(), Some(1));

    let out = cli(&["--event-name", "release"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn cli_json_output() {
    let out = cli(&[
        "--event-name",
        "push",
        "--commit-message",
        "[ci-validate-clap]",
        "--output-format",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["should_run"], true);
    assert_eq!(v["platforms"], serde_json::json!([]));
    assert_eq!(v["validation_formats"], serde_json::json!(["clap"]));
    assert_eq!(v["validation_formats_json"], r#"["clap"]"#);
    assert_eq!(v["platforms_json"], "[]");
    assert_eq!(v["event_name"], "push");
    assert_eq!(v["trigger_reason"], "Format-specific validation tags: clap");
}

#[test]
fn cli_shell_output() {
    let out = cli(&["--event-name", "workflow_dispatch", "--output-format", "shell"]);

    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("SHOULD_RUN=true\n"));
    assert!(text.contains("PLATFORMS='[\"linux\", \"windows\", \"macos\"]'\n"));
    assert!(text.contains("VALIDATION_FORMATS='[\"clap\", \"vst3\", \"auv2\"]'\n"));
    assert!(text.contains("TRIGGER_REASON='Triggered by workflow_dispatch event'\n"));
}

#[test]
fn cli_reads_inputs_from_env() {
    let out = Command::new(env!("CARGO_BIN_EXE_pluginci-cli"))
        .env("GITHUB_EVENT_NAME", "push")
        .env("CI_COMMIT_MESSAGE", "fix [ci-build-macos]")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("platforms=[\"macos\"]"));
}

#[test]
fn cli_reads_message_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fix: windows\n\nLonger body [ci-build-windows]").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let out = cli(&["--event-name", "push", "--commit-message-file", &path]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("platforms=[\"windows\"]"));
}

#[test]
fn cli_missing_message_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let out = cli(&[
        "--event-name",
        "push",
        "--commit-message-file",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read commit message"));
}

#[test]
fn cli_missing_event_name_is_usage_error() {
    let out = cli(&["--commit-message", "[ci-build]"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn cli_verbose_logs_to_stderr_only() {
    let out = cli(&["--event-name", "push", "--commit-message", "[ci-build]", "--verbose"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with("should-run=true\n"));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("General [ci-build] tag found"));
}

#[test]
fn cli_json_record_arrays_match_step_outputs() {
    let out = cli(&[
        "--event-name",
        "push",
        "--commit-message",
        "[ci-build-linux] [ci-build-windows] [ci-validate]",
        "--output-format",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["platforms_json"], r#"["linux", "windows"]"#);
    assert_eq!(v["validation_formats_json"], r#"["clap", "vst3", "auv2"]"#);
}

#[test]
fn cli_verbose_wins_over_quiet_rust_log() {
    let out = Command::new(env!("CARGO_BIN_EXE_pluginci-cli"))
        .args(["--event-name", "push", "--commit-message", "[ci-build-macos]", "--verbose"])
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("CI_COMMIT_MESSAGE")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Platform-specific build tags: macos"));
}

#[test]
fn cli_rust_log_applies_without_verbose() {
    let out = Command::new(env!("CARGO_BIN_EXE_pluginci-cli"))
        .args(["--event-name", "push", "--commit-message", "[ci-build-macos]"])
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("CI_COMMIT_MESSAGE")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Platform-specific build tags: macos"));
}
