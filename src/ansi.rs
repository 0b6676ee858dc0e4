//! ANSI escape code stripping
//!
//! Removes CSI sequences (`ESC [ <parameter bytes> <final letter>`) from a
//! raw byte stream. Everything else, including malformed or truncated escape
//! fragments and invalid UTF-8, passes through untouched.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// CSI sequence: ESC, '[', parameter bytes 0x30..=0x3F, one ASCII letter
static CSI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)\x1b\[[\x30-\x3F]*[A-Za-z]").expect("CSI pattern is valid")
});

/// Strip ANSI CSI sequences from `input`
///
/// Total: never fails and never allocates more than the input size.
pub fn strip_ansi(input: &[u8]) -> Vec<u8> {
    CSI_REGEX.replace_all(input, &b""[..]).into_owned()
}
