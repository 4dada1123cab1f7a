//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod registry;
mod sanitizer;

#[cfg(test)]
mod tests;

use crate::schema::StylekitConfig;
use stylekit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StylekitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sanitizer::validate_limits(&mut errors, config);
    sanitizer::validate_url_schemes(&mut errors, config);
    sanitizer::validate_denied_properties(&mut errors, config);
    registry::validate_registry(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
