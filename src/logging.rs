// src/logging.rs
use anyhow::{Context, Result};

/// Installs the stderr logger. `RUST_LOG` takes precedence over the default
/// level (`warn`, or `debug` with `--verbose`).
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .context("failed to initialise logging")
}
