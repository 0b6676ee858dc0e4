//! Integration tests for running real commands through the shell

#![cfg(unix)]

use hush::batch::{run_single, Job};
use hush::{ColorMode, Executor, PresentationOptions, Printer, ShellExecutor};

#[tokio::test]
async fn test_echo_captured() {
    let executor = ShellExecutor::new();
    let result = executor.execute("echo hello", None).await.unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, b"hello\n");
    assert_eq!(result.label, "echo");
    assert!(result.is_success());
}

#[tokio::test]
async fn test_exit_code_propagates() {
    let executor = ShellExecutor::new();
    let result = executor.execute("exit 42", None).await.unwrap();

    assert_eq!(result.exit_code, 42);
    assert_eq!(result.label, "exit");
    assert!(!result.is_success());
}

#[tokio::test]
async fn test_stderr_merged_in_order() {
    let executor = ShellExecutor::new();
    let result = executor
        .execute("echo out1; echo err1 >&2; echo out2", None)
        .await
        .unwrap();

    assert_eq!(result.output, b"out1\nerr1\nout2\n");
}

#[tokio::test]
async fn test_shell_features_available() {
    let executor = ShellExecutor::new();
    let result = executor
        .execute("printf 'a\\nb\\nc\\n' | grep -v b && false", None)
        .await
        .unwrap();

    assert_eq!(result.output, b"a\nc\n");
    assert_eq!(result.exit_code, 1);
}

#[tokio::test]
async fn test_explicit_label_and_path_stripping() {
    let executor = ShellExecutor::new();

    let labelled = executor.execute("true", Some("noop")).await.unwrap();
    assert_eq!(labelled.label, "noop");

    let derived = executor.execute("/bin/echo hi", None).await.unwrap();
    assert_eq!(derived.label, "echo");
}

#[tokio::test]
async fn test_signal_maps_to_128_plus() {
    let executor = ShellExecutor::new();
    let result = executor.execute("kill -9 $$", None).await.unwrap();

    assert_eq!(result.exit_code, 137);
}

#[tokio::test]
async fn test_working_dir_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let mut executor = ShellExecutor::new();
    executor.set_working_dir(dir.path().to_path_buf());
    executor.set_env("HUSH_TEST_VALUE".to_string(), "42".to_string());

    let result = executor
        .execute("touch marker && echo $HUSH_TEST_VALUE", None)
        .await
        .unwrap();

    assert_eq!(result.output, b"42\n");
    assert!(dir.path().join("marker").exists());
}

#[tokio::test]
async fn test_end_to_end_failure_block() {
    let executor = ShellExecutor::new();
    let mut printer = Printer::new(
        Vec::new(),
        PresentationOptions {
            no_time: true,
            color: ColorMode::Off,
        },
        false,
    );
    let job = Job {
        label: Some("tests".to_string()),
        ..Job::new("echo 'FAIL: something broke'; exit 1")
    };

    let code = run_single(&executor, &mut printer, &job).await.unwrap();

    assert_eq!(code, 1);
    assert_eq!(
        String::from_utf8(printer.into_inner()).unwrap(),
        "✗ tests\n  FAIL: something broke\n"
    );
}
