//! Command execution
//!
//! Runs a command string through the platform shell, captures stdout and
//! stderr merged in arrival order, and times the whole run. Execution never
//! times out and is never cancelled from here.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use tokio::process::Command;

use crate::error::{Error, Result};
use crate::models::ExecutionResult;

/// Label used when a command has no tokens at all
pub const UNKNOWN_LABEL: &str = "unknown";

/// Exit code reported when the platform gives neither a code nor a signal
const FALLBACK_EXIT_CODE: i32 = 1;

/// Runs one command to completion
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Execute `command`, labelling the result with `label` or a derived one
    async fn execute(&self, command: &str, label: Option<&str>) -> Result<ExecutionResult>;
}

/// Executes commands through `sh -c` (or `cmd /C` on Windows)
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    /// Working directory; inherits the current one when unset
    working_dir: Option<PathBuf>,
    /// Extra environment variables
    env_vars: HashMap<String, String>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn set_working_dir(&mut self, dir: PathBuf) {
        self.working_dir = Some(dir);
    }

    /// Set environment variable
    pub fn set_env(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    fn shell_command(&self, command: &str) -> Command {
        let mut cmd = platform_shell(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.envs(&self.env_vars)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait::async_trait]
impl Executor for ShellExecutor {
    async fn execute(&self, command: &str, label: Option<&str>) -> Result<ExecutionResult> {
        let label = resolve_label(command, label);
        debug!(%label, command, "spawning command");

        let start = Instant::now();
        let output = self
            .shell_command(command)
            .output()
            .await
            .map_err(|e| Error::CommandSpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;
        let duration = start.elapsed();

        // stderr is already folded into stdout by the shell; anything left
        // here was written before the redirect took effect
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        let exit_code = exit_code_of(output.status);
        info!(
            %label,
            exit_code,
            elapsed_ms = duration.as_millis() as u64,
            output_bytes = combined.len(),
            "command finished"
        );

        Ok(ExecutionResult::new(
            label, command, exit_code, duration, combined,
        ))
    }
}

#[cfg(unix)]
fn platform_shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(format!("exec 2>&1\n{}", command));
    cmd
}

#[cfg(windows)]
fn platform_shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(format!("{} 2>&1", command));
    cmd
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    FALLBACK_EXIT_CODE
}

/// Use `label` when given and non-empty, otherwise derive one from `command`
pub fn resolve_label(command: &str, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => derive_label(command),
    }
}

/// First whitespace-separated token of `command`, without any path prefix
pub fn derive_label(command: &str) -> String {
    match command.split_whitespace().next() {
        Some(token) => token.rsplit('/').next().unwrap_or(token).to_string(),
        None => UNKNOWN_LABEL.to_string(),
    }
}
