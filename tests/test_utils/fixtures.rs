//! Test Fixtures
//!
//! Canned command output for pipeline and presenter tests

use std::time::Duration;

use hush::{ColorMode, ExecutionResult, PresentationOptions};

/// A pytest-style run: progress bar, timestamped logs, a 3-frame traceback
pub fn python_failure_output() -> Vec<u8> {
    [
        "\x1b[1m============ test session starts ============\x1b[0m",
        "collected 3 items\r",
        " 66%|██████▋   | 2/3",
        "2024-01-15T10:30:00 INFO Starting worker",
        "2024-01-15 10:30:01.250 DEBUG loading fixtures",
        "Traceback (most recent call last):",
        "  File \"test.py\", line 10, in <module>",
        "    foo()",
        "  File \"test.py\", line 5, in foo",
        "    bar()",
        "  File \"test.py\", line 2, in bar",
        "    raise ValueError(\"bad\")",
        "ValueError: bad",
        "\x1b[31mFAILED\x1b[0m test.py::test_bar",
        "",
    ]
    .join("\n")
    .into_bytes()
}

/// `count` numbered lines, newline-terminated
pub fn numbered_lines(count: usize) -> Vec<u8> {
    (1..=count)
        .map(|i| format!("line{}\n", i))
        .collect::<String>()
        .into_bytes()
}

/// Presentation without color, with or without durations
pub fn plain_options(no_time: bool) -> PresentationOptions {
    PresentationOptions {
        no_time,
        color: ColorMode::Off,
    }
}

/// A finished command with the given exit code and output
pub fn finished(label: &str, exit_code: i32, output: &[u8]) -> ExecutionResult {
    ExecutionResult::new(
        label,
        label,
        exit_code,
        Duration::from_millis(100),
        output.to_vec(),
    )
}
