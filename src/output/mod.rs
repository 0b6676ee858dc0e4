//! Result presentation
//!
//! Renders the one-line pass/fail summary for a command, the indented
//! failure body, and the aggregate batch line. The presenter decides
//! colors and durations; it never touches the body text itself.

pub mod duration;

use std::io::{self, IsTerminal, Stdout, Write};

use crate::error::Result;
use crate::models::{BatchSummary, ExecutionResult};

pub use duration::format_duration;

const PASS_GLYPH: &str = "✓";
const FAIL_GLYPH: &str = "✗";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

const BODY_INDENT: &[u8] = b"  ";

/// Color policy for the summary lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when the sink is an interactive terminal
    #[default]
    Auto,
    /// Always color
    On,
    /// Never color
    Off,
}

impl ColorMode {
    /// Resolve the policy against the sink
    pub fn enabled(self, sink_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => sink_is_terminal,
            ColorMode::On => true,
            ColorMode::Off => false,
        }
    }
}

/// Presentation settings, resolved before any rendering happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationOptions {
    /// Suppress the duration parenthetical
    pub no_time: bool,
    pub color: ColorMode,
}

/// Writes rendered summaries to a sink
pub struct Printer<W: Write> {
    out: W,
    options: PresentationOptions,
    color: bool,
}

impl Printer<Stdout> {
    /// Printer on stdout; `ColorMode::Auto` follows whether stdout is a TTY
    pub fn stdout(options: PresentationOptions) -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::new(stdout, options, is_terminal)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, options: PresentationOptions, sink_is_terminal: bool) -> Self {
        let color = options.color.enabled(sink_is_terminal);
        debug!(color_mode = ?options.color, sink_is_terminal, color, "resolved color mode");
        Self {
            out,
            options,
            color,
        }
    }

    /// Whether escape codes are emitted
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Print the summary line for `result`, plus `filtered` on failure
    pub fn print_result(&mut self, result: &ExecutionResult, filtered: &[u8]) -> Result<()> {
        let rendered = render_result(result, filtered, self.options.no_time, self.color);
        self.out.write_all(&rendered)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print the `<glyph> <passed>/<total> checks passed` line
    pub fn print_batch_summary(&mut self, summary: &BatchSummary) -> Result<()> {
        let rendered = render_batch_summary(summary, self.options.no_time, self.color);
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render the full block for one command
///
/// Success is the status line alone. Failure appends the filtered output,
/// minus one trailing newline, with every line indented by two spaces.
pub fn render_result(
    result: &ExecutionResult,
    filtered: &[u8],
    no_time: bool,
    color: bool,
) -> Vec<u8> {
    let success = result.is_success();
    let mut out = status_line(success, &result.label, result.duration, no_time, color).into_bytes();
    if !success && !filtered.is_empty() {
        out.extend_from_slice(&indent_block(filtered));
    }
    out
}

/// Render the aggregate batch line
pub fn render_batch_summary(summary: &BatchSummary, no_time: bool, color: bool) -> String {
    let text = format!("{}/{} checks passed", summary.passed, summary.total);
    status_line(summary.all_passed(), &text, summary.duration, no_time, color)
}

/// `<glyph> <text>[ (<duration>)]\n`
fn status_line(
    success: bool,
    text: &str,
    duration: std::time::Duration,
    no_time: bool,
    color: bool,
) -> String {
    let (glyph, glyph_color) = if success {
        (PASS_GLYPH, GREEN)
    } else {
        (FAIL_GLYPH, RED)
    };

    let mut line = if color {
        format!("{glyph_color}{glyph}{RESET} {text}")
    } else {
        format!("{glyph} {text}")
    };

    if !no_time {
        let elapsed = format_duration(duration);
        if color {
            line.push_str(&format!(" {DIM}({elapsed}){RESET}"));
        } else {
            line.push_str(&format!(" ({elapsed})"));
        }
    }

    line.push('\n');
    line
}

/// Prefix every line of `block` with two spaces, dropping one trailing newline
fn indent_block(block: &[u8]) -> Vec<u8> {
    let body = block.strip_suffix(b"\n").unwrap_or(block);
    let mut out = Vec::with_capacity(body.len() + BODY_INDENT.len() * 4 + 1);
    for line in body.split(|&b| b == b'\n') {
        out.extend_from_slice(BODY_INDENT);
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}
