//! Diagnostic output for the hook.
//!
//! Records go to stderr so cfn-guard's own report on stdout stays readable.

use std::io::{self, IsTerminal};

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &[
    "guard_hook",
    "guard_hook_archive",
    "guard_hook_fetch",
    "guard_hook_fs",
    "guard_hook_install",
    "guard_hook_platform",
    "guard_hook_verify",
];

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default of `info` (`debug` when `verbose`) for
/// the hook's crates.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .with_ansi(io::stderr().is_terminal())
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()
}

fn default_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
