//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::schema::LoggingConfig;

/// Install a fmt subscriber filtered at the configured level.
///
/// `RUST_LOG` overrides the config when set. Returns `false` when a global
/// subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = config.level.as_directive(), "logging initialized");
    }
    installed
}
