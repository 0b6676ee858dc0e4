//! Agent-mode normalization
//!
//! Shrinks verbose tool output to what an automated reader needs. Runs on
//! ANSI-stripped text in three passes, always in this order:
//!
//! 1. [`collapse_tracebacks`] - header-through-exception spans become one line
//! 2. [`remove_progress_lines`] - carriage-return redraws and tqdm bars go
//! 3. [`strip_timestamps`] - leading ISO-8601 prefixes are cut
//!
//! Collapse goes first so frame-location lines are never mistaken for
//! progress or timestamped log lines.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use super::{join_lines, split_lines};
use crate::ansi::strip_ansi;

const TRACEBACK_HEADER: &[u8] = b"Traceback (most recent call last):";
const FRAME_PREFIX: &[u8] = b"File ";
const REPEATED_FRAME_PREFIX: &[u8] = b"[Previous line repeated";

static FRAME_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^File "([^"]*)", line ([0-9]+)"#).expect("frame pattern is valid")
});

// `ValueError: bad`, `KeyboardInterrupt`, `requests.exceptions.HTTPError: 500`
static EXCEPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*(?::|$)").expect("exception pattern is valid")
});

// tqdm-style bar: `50%|████ | 5/10`
static PROGRESS_BAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+%\|[█▏▎▍▌▋▊▉ ]*\|").expect("progress pattern is valid")
});

// `2024-01-15T10:30:00`, `2024-01-15 10:30:00.123`, `2024-01-15 10:30:00,123`
static TIMESTAMP_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[T ][0-9]{2}:[0-9]{2}:[0-9]{2}(?:[.,][0-9]+)?\s*")
        .expect("timestamp pattern is valid")
});

/// Strip ANSI, then run the three agent-mode passes
pub fn apply_agent_mode(raw: &[u8]) -> Vec<u8> {
    normalize(&strip_ansi(raw))
}

/// Run the three agent-mode passes on already-stripped text
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let collapsed = collapse_tracebacks(input);
    let quiet = remove_progress_lines(&collapsed);
    strip_timestamps(&quiet)
}

/// Traceback scanner state
#[derive(Debug)]
enum ScanState {
    /// Copying lines through, watching for a header
    Scanning,
    /// Inside a traceback, counting frames until the exception line
    ConsumingFrames(TracebackSpan),
}

/// What has been consumed since the header
#[derive(Debug)]
struct TracebackSpan {
    /// Index of the header line
    start: usize,
    frames: usize,
    /// Location of the most recent frame, `path:line`
    last_location: Option<String>,
    /// Indentation of the most recent frame line
    frame_indent: Option<usize>,
    /// No snippet consumed yet for the most recent frame
    snippet_open: bool,
}

/// Role of a line inside a traceback
#[derive(Debug, PartialEq, Eq)]
enum TracebackLine {
    Blank,
    Frame,
    /// Source snippet, caret markers or repeat notes belonging to a frame
    Snippet,
    /// The exception message ending the traceback
    Terminator,
}

impl TracebackSpan {
    fn new(start: usize) -> Self {
        Self {
            start,
            frames: 0,
            last_location: None,
            frame_indent: None,
            snippet_open: false,
        }
    }

    fn classify(&self, line: &[u8]) -> TracebackLine {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            return TracebackLine::Blank;
        }
        if trimmed.starts_with(FRAME_PREFIX) {
            return TracebackLine::Frame;
        }
        let indent = indentation(line);
        match self.frame_indent {
            Some(frame) if indent > frame => TracebackLine::Snippet,
            Some(_) if trimmed.starts_with(REPEATED_FRAME_PREFIX) => TracebackLine::Snippet,
            // unindented tracebacks: one source line per frame, unless it
            // already reads like the exception
            Some(frame)
                if indent == frame && self.snippet_open && !EXCEPTION_LINE.is_match(trimmed) =>
            {
                TracebackLine::Snippet
            }
            _ => TracebackLine::Terminator,
        }
    }

    fn record_frame(&mut self, line: &[u8]) {
        self.frames += 1;
        self.frame_indent = Some(indentation(line));
        self.snippet_open = true;
        self.last_location = Some(frame_location(line.trim_ascii()));
    }

    /// Synthetic replacement line for the whole span
    fn summary(&self, terminator: &[u8]) -> Vec<u8> {
        let mut line = format!("Traceback ... ({} frames) ", self.frames);
        if let Some(location) = &self.last_location {
            line.push_str(location);
            line.push(' ');
        }
        line.push_str("→ ");
        let mut out = line.into_bytes();
        out.extend_from_slice(terminator.trim_ascii());
        out
    }
}

/// Replace each terminated traceback with a one-line summary
///
/// A header with no terminating line before the input ends is left as is,
/// together with everything after it.
pub fn collapse_tracebacks(input: &[u8]) -> Vec<u8> {
    let lines = split_lines(input);
    let mut out: Vec<Cow<'_, [u8]>> = Vec::with_capacity(lines.len());
    let mut state = ScanState::Scanning;

    for (idx, &line) in lines.iter().enumerate() {
        state = match state {
            ScanState::Scanning => {
                if line.trim_ascii() == TRACEBACK_HEADER {
                    ScanState::ConsumingFrames(TracebackSpan::new(idx))
                } else {
                    out.push(Cow::Borrowed(line));
                    ScanState::Scanning
                }
            }
            ScanState::ConsumingFrames(mut span) => match span.classify(line) {
                TracebackLine::Frame => {
                    span.record_frame(line);
                    ScanState::ConsumingFrames(span)
                }
                TracebackLine::Blank => ScanState::ConsumingFrames(span),
                TracebackLine::Snippet => {
                    span.snippet_open = false;
                    ScanState::ConsumingFrames(span)
                }
                TracebackLine::Terminator => {
                    debug!(frames = span.frames, "collapsed traceback");
                    out.push(Cow::Owned(span.summary(line)));
                    ScanState::Scanning
                }
            },
        };
    }

    if let ScanState::ConsumingFrames(span) = state {
        trace!(start = span.start, "unterminated traceback left in place");
        out.extend(lines[span.start..].iter().map(|&line| Cow::Borrowed(line)));
    }

    join_lines(out.iter().map(|line| &**line))
}

/// Drop in-place redraw lines: anything holding `\r`, and tqdm-style bars
pub fn remove_progress_lines(input: &[u8]) -> Vec<u8> {
    join_lines(
        split_lines(input)
            .into_iter()
            .filter(|line| !line.contains(&b'\r') && !PROGRESS_BAR.is_match(line)),
    )
}

/// Cut a leading ISO-8601 date/time prefix from every line that has one
pub fn strip_timestamps(input: &[u8]) -> Vec<u8> {
    join_lines(split_lines(input).into_iter().map(|line| {
        match TIMESTAMP_PREFIX.find(line) {
            Some(prefix) => &line[prefix.end()..],
            None => line,
        }
    }))
}

fn indentation(line: &[u8]) -> usize {
    line.iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count()
}

/// `File "app.py", line 12, in main` -> `app.py:12`
fn frame_location(trimmed: &[u8]) -> String {
    match FRAME_LOCATION.captures(trimmed) {
        Some(caps) => format!(
            "{}:{}",
            String::from_utf8_lossy(&caps[1]),
            String::from_utf8_lossy(&caps[2])
        ),
        None => String::from_utf8_lossy(&trimmed[FRAME_PREFIX.len()..])
            .trim()
            .to_string(),
    }
}
