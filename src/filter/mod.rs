//! Output filtering pipeline
//!
//! Reduces the raw captured bytes of a command to a bounded block. Stages
//! run in a fixed order and each one is skipped when its setting is off:
//!
//! 1. ANSI strip (`strip_ansi` or `agent_mode`)
//! 2. Agent-mode normalization (`agent_mode`)
//! 3. Grep (non-empty `grep`)
//! 4. Head/tail (`head > 0 || tail > 0`)
//!
//! Grep must see de-escaped, de-noised text and truncation must see the
//! grep-reduced set, so the order is part of the contract.

pub mod agent;
pub mod grep;
pub mod truncate;

use serde::Deserialize;

use crate::ansi::strip_ansi;

pub use agent::apply_agent_mode;
pub use grep::apply_grep;
pub use truncate::apply_head_tail;

/// Fully resolved filter settings for one command
///
/// Built once by the configuration layer and only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep at most this many leading lines (0 = unbounded)
    pub head: usize,
    /// Keep at most this many trailing lines (0 = unbounded)
    pub tail: usize,
    /// Retain only lines matching this regex (empty = disabled)
    pub grep: String,
    /// Remove ANSI escape sequences
    pub strip_ansi: bool,
    /// Apply the agent-mode normalization profile
    pub agent_mode: bool,
}

impl FilterConfig {
    /// True when no stage would run and the output passes through verbatim
    pub fn is_passthrough(&self) -> bool {
        !self.strip_ansi
            && !self.agent_mode
            && self.grep.is_empty()
            && self.head == 0
            && self.tail == 0
    }
}

/// Apply every enabled stage of `config` to `raw`, in pipeline order
pub fn apply(raw: &[u8], config: &FilterConfig) -> Vec<u8> {
    if config.is_passthrough() {
        return raw.to_vec();
    }

    let mut result = raw.to_vec();

    if config.strip_ansi || config.agent_mode {
        result = strip_ansi(&result);
        trace!("stripped ANSI, {} -> {} bytes", raw.len(), result.len());
    }

    if config.agent_mode {
        result = agent::normalize(&result);
        trace!("agent-mode normalization left {} bytes", result.len());
    }

    if !config.grep.is_empty() {
        result = apply_grep(&result, &config.grep);
    }

    if config.head > 0 || config.tail > 0 {
        result = apply_head_tail(&result, config.head, config.tail);
    }

    debug!(
        raw_bytes = raw.len(),
        filtered_bytes = result.len(),
        "filtered command output"
    );
    result
}

/// Split on `\n`; a trailing terminator yields a final empty line
pub(crate) fn split_lines(input: &[u8]) -> Vec<&[u8]> {
    input.split(|&b| b == b'\n').collect()
}

/// Join lines with `\n`, without a trailing terminator
pub(crate) fn join_lines<'a, I>(lines: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut out = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if idx > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(line);
    }
    out
}
