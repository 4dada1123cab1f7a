//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod registry;
mod sanitizer;

pub use logging::*;
pub use registry::*;
pub use sanitizer::*;

use serde::{Deserialize, Serialize};
use stylekit_css::CssSanitizer;
use stylekit_tokens::TokenRegistry;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylekitConfig {
    pub sanitizer: SanitizerConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

impl StylekitConfig {
    /// Sanitizer built from the `[sanitizer]` section.
    pub fn sanitizer(&self) -> CssSanitizer {
        CssSanitizer::new(self.sanitizer.policy())
    }

    /// Token registry built from the `[sanitizer]` and `[registry]` sections.
    pub fn registry(&self) -> TokenRegistry {
        TokenRegistry::new(self.sanitizer())
            .with_default_context(self.registry.default_context.trim())
            .with_option_keys(self.registry.option_keys())
    }
}
