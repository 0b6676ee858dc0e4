//! hush - run a command, print one line, show output only on failure

use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use hush::batch::{run_batch, run_single};
use hush::cli::{Cli, Plan};
use hush::config::{CheckFile, ConfigLoader};
use hush::{logging, Printer, ShellExecutor};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.shared.debug);

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("hush: {:#}", e);
            process::exit(1);
        }
    }
}

/// Execute the parsed invocation and return the process exit code
async fn run(cli: Cli) -> anyhow::Result<i32> {
    let checks = load_checks(&cli)?;
    let plan = cli.plan(checks.as_ref())?;
    debug!(?plan, "resolved run plan");

    let executor = ShellExecutor::new();
    let mut printer = Printer::stdout(cli.presentation());

    let code = match plan {
        Plan::Single(job) => run_single(&executor, &mut printer, &job)
            .await
            .with_context(|| format!("running '{}'", job.command))?,
        Plan::Batch { jobs, options } => {
            run_batch(&executor, &mut printer, &jobs, options)
                .await
                .context("running batch")?
                .exit_code
        }
    };
    Ok(code)
}

/// Load the nearest check file when the plan could use one
///
/// A broken check file only matters to `hush all`; a plain command still
/// runs, with a warning.
fn load_checks(cli: &Cli) -> anyhow::Result<Option<CheckFile>> {
    if !cli.wants_checks() {
        return Ok(None);
    }

    let loaded = ConfigLoader::new().and_then(|loader| loader.load());
    match loaded {
        Ok(checks) => Ok(checks),
        Err(e) if matches!(cli.subcommand, Some(hush::cli::Command::All { .. })) => {
            Err(e).context("loading check file")
        }
        Err(e) => {
            warn!("ignoring check file: {}", e);
            Ok(None)
        }
    }
}
