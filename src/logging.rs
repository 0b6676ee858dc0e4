//! Diagnostic logging
//!
//! Logs go to stderr so they never interleave with the summary lines on
//! stdout. Level priority: `RUST_LOG` > `--debug` / `HUSH_DEBUG` > `warn`.

use tracing_subscriber::EnvFilter;

/// Environment switch equivalent to `--debug`
pub const DEBUG_ENV: &str = "HUSH_DEBUG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global subscriber; later calls are no-ops
pub fn init(debug_flag: bool) {
    let debug = debug_flag || env_flag(DEBUG_ENV);

    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        debug!(version = crate::VERSION, "logging initialised");
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
