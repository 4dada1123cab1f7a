//! Token registry storage configuration.

use serde::{Deserialize, Serialize};
use stylekit_tokens::{OptionKeys, DEFAULT_CONTEXT};

/// `[registry]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub tokens_option: String,
    pub css_option: String,
    /// Context for tokens that name none.
    pub default_context: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let keys = OptionKeys::default();
        Self {
            tokens_option: keys.tokens,
            css_option: keys.css,
            default_context: DEFAULT_CONTEXT.into(),
        }
    }
}

impl RegistryConfig {
    pub fn option_keys(&self) -> OptionKeys {
        OptionKeys {
            tokens: self.tokens_option.trim().to_string(),
            css: self.css_option.trim().to_string(),
        }
    }
}
