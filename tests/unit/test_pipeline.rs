//! Unit tests for the filter pipeline

#[path = "../test_utils/mod.rs"]
mod test_utils;

use hush::filter::{apply, apply_grep, apply_head_tail, FilterConfig};
use test_utils::fixtures::{numbered_lines, python_failure_output};

#[test]
fn test_tail_end_to_end() {
    let config = FilterConfig {
        tail: 2,
        ..Default::default()
    };
    assert_eq!(
        apply(b"line1\nline2\nline3\nline4\nline5\n", &config),
        b"line4\nline5"
    );
}

#[test]
fn test_tail_then_head_end_to_end() {
    let config = FilterConfig {
        tail: 5,
        head: 3,
        ..Default::default()
    };
    assert_eq!(apply(b"a\nb\nc\nd\ne\nf\ng\n", &config), b"c\nd\ne");
}

#[test]
fn test_head_only() {
    let config = FilterConfig {
        head: 3,
        ..Default::default()
    };
    assert_eq!(apply(&numbered_lines(5), &config), b"line1\nline2\nline3");
}

#[test]
fn test_grep_only() {
    let config = FilterConfig {
        grep: "ERROR".to_string(),
        ..Default::default()
    };
    assert_eq!(
        apply(b"INFO ok\nERROR bad\nINFO fine\nERROR worse\n", &config),
        b"ERROR bad\nERROR worse"
    );
}

#[test]
fn test_invalid_grep_is_byte_for_byte_passthrough() {
    let input = numbered_lines(4);
    assert_eq!(apply_grep(&input, "(unclosed"), input);
    let config = FilterConfig {
        grep: "*oops".to_string(),
        ..Default::default()
    };
    assert_eq!(apply(&input, &config), input);
}

#[test]
fn test_strip_only_keeps_trailing_newline() {
    let config = FilterConfig {
        strip_ansi: true,
        ..Default::default()
    };
    assert_eq!(apply(b"\x1b[31merror\x1b[0m\n", &config), b"error\n");
}

#[test]
fn test_passthrough_is_identity() {
    let input = b"hello world\n";
    assert_eq!(apply(input, &FilterConfig::default()), input);
}

#[test]
fn test_agent_grep_tail_compose() {
    let config = FilterConfig {
        agent_mode: true,
        grep: "Traceback|FAILED".to_string(),
        tail: 1,
        ..Default::default()
    };
    assert_eq!(
        apply(&python_failure_output(), &config),
        b"FAILED test.py::test_bar"
    );
}

#[test]
fn test_head_tail_bounds_beyond_length() {
    let input = numbered_lines(3);
    assert_eq!(apply_head_tail(&input, 10, 10), b"line1\nline2\nline3");
}

#[test]
fn test_config_is_not_mutated() {
    let config = FilterConfig {
        head: 1,
        tail: 2,
        grep: "line".to_string(),
        strip_ansi: true,
        agent_mode: true,
    };
    let before = config.clone();
    let _ = apply(&numbered_lines(10), &config);
    assert_eq!(config, before);
}
