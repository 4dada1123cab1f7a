//! Stylekit configuration.
//!
//! TOML-based configuration for the sanitizer, the token registry and
//! logging. Every section uses serde defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stylekit_config::{init_logging, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! init_logging(&config.logging);
//! let registry = config.registry();
//! ```

pub mod logging;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use logging::init_logging;
pub use schema::{LogLevel, LoggingConfig, RegistryConfig, SanitizerConfig, StylekitConfig};

use stylekit_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file when none exists.
pub fn load_config() -> Result<StylekitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &StylekitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
