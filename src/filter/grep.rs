//! Line-oriented regex retention filter

use regex::bytes::Regex;

use super::{join_lines, split_lines};

/// Keep only the lines of `input` that `pattern` matches anywhere
///
/// Relative order is preserved and dropped lines leave no gap. A pattern
/// that fails to compile returns `input` unchanged: a bad user pattern must
/// never abort the run.
pub fn apply_grep(input: &[u8], pattern: &str) -> Vec<u8> {
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            debug!(pattern, error = %e, "invalid grep pattern, passing output through");
            return input.to_vec();
        }
    };

    join_lines(
        split_lines(input)
            .into_iter()
            .filter(|line| regex.is_match(line)),
    )
}
