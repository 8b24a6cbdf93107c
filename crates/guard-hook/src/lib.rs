//! pre-commit hook around a version-pinned `cfn-guard`.
//!
//! [`run`] turns the command line into one cfn-guard invocation per staged
//! file, installing the pinned release on first use, and folds the exit codes
//! into a single result.

pub use cli::Cli;
pub use command::{Invocation, Operation};
pub use config::HookEnv;
pub use error::{EXIT_SOFTWARE, EXIT_UNAVAILABLE, EXIT_USAGE, Error, Result, exit_code_for};

mod cli;
mod command;
pub mod config;
mod error;
pub mod logging;

use anyhow::Context;
use guard_hook_install::{Install, Runner};

/// Run the hook for the process environment.
///
/// An empty file list succeeds without touching configuration or the
/// install root.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.filenames.is_empty() {
        tracing::debug!("no files to check");
        return Ok(0);
    }
    let env = HookEnv::from_env().context("failed to read hook configuration")?;
    run_in(cli, &env)
}

/// Run the hook against an explicit environment.
pub fn run_in(cli: &Cli, env: &HookEnv) -> anyhow::Result<i32> {
    let runner = env.runner().context("failed to prepare cfn-guard")?;
    Ok(dispatch(cli, &runner)?)
}

/// Run cfn-guard once per file and aggregate the exit codes.
///
/// Every invocation is built before the first one runs, so a bad operation
/// or missing flag never triggers an install. The result is `0` when every
/// run passed, otherwise the code of the last run that failed.
pub fn dispatch<I: Install>(cli: &Cli, runner: &Runner<I>) -> Result<i32> {
    warn_ignored("--operation", &cli.operation);
    warn_ignored("--rules", &cli.rules);
    warn_ignored("--dir", &cli.dir);

    let operation = cli.operation.first().map(String::as_str).unwrap_or_default();
    let invocations = cli
        .filenames
        .iter()
        .map(|file| Invocation::build(operation, &cli.rules, &cli.dir, file))
        .collect::<Result<Vec<_>>>()?;

    let mut result = 0;
    for (file, invocation) in cli.filenames.iter().zip(&invocations) {
        tracing::debug!(file = %file, command = %invocation, "running cfn-guard");
        let code = runner.run(invocation.args())?;
        if code != 0 {
            tracing::debug!(file = %file, code, "cfn-guard reported a failure");
            result = code;
        }
    }
    Ok(result)
}

fn warn_ignored(flag: &str, values: &[String]) {
    if let [used, ignored @ ..] = values {
        if !ignored.is_empty() {
            tracing::warn!(flag, used = %used, ignored = ?ignored, "only the first value is used");
        }
    }
}
