//! Unit tests for agent-mode normalization

#[path = "../test_utils/mod.rs"]
mod test_utils;

use hush::filter::agent::{
    apply_agent_mode, collapse_tracebacks, normalize, remove_progress_lines, strip_timestamps,
};
use test_utils::fixtures::python_failure_output;

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_full_profile_on_pytest_output() {
    let got = text(apply_agent_mode(&python_failure_output()));
    assert_eq!(
        got,
        "============ test session starts ============\n\
         INFO Starting worker\n\
         DEBUG loading fixtures\n\
         Traceback ... (3 frames) test.py:2 → ValueError: bad\n\
         FAILED test.py::test_bar\n"
    );
}

#[test]
fn test_frame_lines_not_mistaken_for_timestamps() {
    // collapse runs before timestamp stripping, so the log line that
    // follows the traceback is handled on its own
    let input = "Traceback (most recent call last):\n  File \"job.py\", line 4, in run\n    step()\nOSError: disk full\n2024-03-01 08:00:00 ERROR job aborted";
    assert_eq!(
        text(normalize(input.as_bytes())),
        "Traceback ... (1 frames) job.py:4 → OSError: disk full\nERROR job aborted"
    );
}

#[test]
fn test_unterminated_traceback_keeps_everything() {
    let input = "ok\nTraceback (most recent call last):\n  File \"a.py\", line 1, in <module>\n    boom()\n";
    assert_eq!(text(collapse_tracebacks(input.as_bytes())), input);
}

#[test]
fn test_last_frame_location_reported() {
    let input = "Traceback (most recent call last):\n  File \"/app/main.py\", line 88, in <module>\n    main()\n  File \"/app/lib/db.py\", line 14, in connect\n    sock.connect(addr)\nConnectionRefusedError: [Errno 111] Connection refused";
    assert_eq!(
        text(collapse_tracebacks(input.as_bytes())),
        "Traceback ... (2 frames) /app/lib/db.py:14 → ConnectionRefusedError: [Errno 111] Connection refused"
    );
}

#[test]
fn test_progress_lines_removed_and_neighbours_contiguous() {
    let input = "before\rspin\nstep 1\n 10%|█         | 1/10\nstep 2\n100%|██████████| 10/10\nstep 3";
    assert_eq!(
        text(remove_progress_lines(input.as_bytes())),
        "step 1\nstep 2\nstep 3"
    );
}

#[test]
fn test_percentage_without_bar_kept() {
    let input = "coverage: 87%\n";
    assert_eq!(text(remove_progress_lines(input.as_bytes())), input);
}

#[test]
fn test_timestamp_prefixes() {
    assert_eq!(
        text(strip_timestamps(b"2024-01-15T10:30:00 INFO Starting")),
        "INFO Starting"
    );
    assert_eq!(
        text(strip_timestamps(b"2024-01-15 10:30:00.123456   DEBUG x")),
        "DEBUG x"
    );
    assert_eq!(
        text(strip_timestamps(b"2024-01-15 INFO date only")),
        "2024-01-15 INFO date only"
    );
}

#[test]
fn test_empty_input() {
    assert!(apply_agent_mode(b"").is_empty());
}
