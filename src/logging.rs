//! Log output setup.
//!
//! The crate itself only emits `tracing` events; nothing is printed unless the
//! application installs a subscriber. [`init`] installs a human-readable one on
//! stderr. `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs a global fmt subscriber filtered at `default_level`
/// (`"info"`, `"debug"`, ...) for this crate, quieter for HTTP internals.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shiori={default_level},reqwest=warn,hyper=warn,h2=warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Other(format!("failed to install log subscriber: {e}")))?;

    tracing::debug!(default_level, "Logging initialized");
    Ok(())
}
