//! Integration tests for the run orchestration.
//!
//! These drive the runner with plain shell commands so they pass without
//! ffmpeg/ffprobe installed.

use clipforge::config::Config;
use clipforge::runner::{run, RunRequest};
use clipforge_av::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn touch(path: &Path) {
    std::fs::write(path, b"x").unwrap();
}

fn base_request(dir: &Path, command: &str) -> RunRequest {
    let input1 = dir.join("a.mp4");
    touch(&input1);
    RunRequest {
        input1,
        input2: None,
        input3: None,
        output: dir.join("out.mp4"),
        command: command.to_string(),
        execute: true,
    }
}

#[tokio::test]
async fn execute_false_short_circuits() {
    let config = Config::default();
    let request = RunRequest {
        input1: PathBuf::from("/nonexistent/a.mp4"),
        input2: None,
        input3: None,
        output: PathBuf::from("/nonexistent/out.mp4"),
        command: "SMART_CONCAT".to_string(),
        execute: false,
    };

    // No validation, no probing, no execution.
    let outcome = run(&config, &request).await.unwrap();
    assert!(outcome.output_path.is_none());
    assert!(outcome.message.contains("skipped"));
}

#[tokio::test]
async fn template_command_produces_output() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let request = base_request(dir.path(), "cp {input1} {output}");

    let outcome = run(&config, &request).await.unwrap();
    assert_eq!(outcome.output_path.as_deref(), Some(request.output.as_path()));
    assert!(request.output.exists());
}

#[tokio::test]
async fn output_parent_directory_is_created() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let mut request = base_request(dir.path(), "cp {input1} {output}");
    request.output = dir.path().join("nested/deeper/out.mp4");

    run(&config, &request).await.unwrap();
    assert!(request.output.exists());
}

#[tokio::test]
async fn unbound_placeholder_reaches_the_shell_verbatim() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let request = base_request(dir.path(), "echo {input2} > {output}");

    run(&config, &request).await.unwrap();
    let written = std::fs::read_to_string(&request.output).unwrap();
    assert_eq!(written.trim(), "{input2}");
}

#[tokio::test]
async fn zero_exit_without_output_is_reported() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let request = base_request(dir.path(), "true");

    let err = run(&config, &request).await.unwrap_err();
    assert!(matches!(err, Error::OutputMissing { .. }));
}

#[tokio::test]
async fn failing_command_reports_process_error() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let request = base_request(dir.path(), "echo broken >&2; exit 2");

    let err = run(&config, &request).await.unwrap_err();
    match err {
        Error::Process { code, stderr } => {
            assert_eq!(code, 2);
            assert!(stderr.contains("broken"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn timeout_aborts_a_hung_command() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.execution.timeout_seconds = 1;
    let request = base_request(dir.path(), "sleep 30");

    let started = Instant::now();
    let err = run(&config, &request).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { seconds: 1 }));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn smart_concat_rejects_a_single_input() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let request = base_request(dir.path(), "SMART_CONCAT crf=20");

    let err = run(&config, &request).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("exactly 2"));
}

#[tokio::test]
async fn missing_input_is_rejected_before_execution() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let mut request = base_request(dir.path(), "cp {input1} {output}");
    request.input2 = Some(dir.path().join("missing.mp4"));

    let err = run(&config, &request).await.unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(!request.output.exists());
}

#[tokio::test]
async fn directory_output_is_rejected() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let mut request = base_request(dir.path(), "cp {input1} {output}");
    request.output = dir.path().to_path_buf();

    let err = run(&config, &request).await.unwrap_err();
    assert!(err.to_string().contains("file name"));
}
