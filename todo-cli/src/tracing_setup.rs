//! Tracing setup for the todo CLI
//!
//! Usage:
//!   todo --debug serve ...            # Debug logging to console
//!   RUST_LOG=todo_server=debug todo   # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the level to debug if RUST_LOG is unset)
    pub debug: bool,
}

/// Initialize console tracing.
///
/// `RUST_LOG` always wins over the `--debug` flag.
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
