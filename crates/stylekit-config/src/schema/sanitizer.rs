//! Sanitizer limits and allow/deny list configuration.

use serde::{Deserialize, Serialize};
use stylekit_css::policy::{SanitizerLimits, SanitizerPolicy, DEFAULT_URL_SCHEMES};

/// `[sanitizer]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    pub max_input_bytes: usize,
    pub max_depth: usize,
    pub max_items: usize,
    /// Replaces the default `http`/`https` allow-list.
    pub allowed_url_schemes: Vec<String>,
    /// Added to the built-in deny-list.
    pub extra_denied_properties: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        let limits = SanitizerLimits::default();
        Self {
            max_input_bytes: limits.max_input_bytes,
            max_depth: limits.max_depth,
            max_items: limits.max_items,
            allowed_url_schemes: DEFAULT_URL_SCHEMES.iter().map(|s| s.to_string()).collect(),
            extra_denied_properties: Vec::new(),
        }
    }
}

impl SanitizerConfig {
    pub fn limits(&self) -> SanitizerLimits {
        SanitizerLimits {
            max_input_bytes: self.max_input_bytes,
            max_depth: self.max_depth,
            max_items: self.max_items,
        }
    }

    pub fn policy(&self) -> SanitizerPolicy {
        SanitizerPolicy::default()
            .with_limits(self.limits())
            .with_url_schemes(&self.allowed_url_schemes)
            .with_denied_properties(&self.extra_denied_properties)
    }
}
