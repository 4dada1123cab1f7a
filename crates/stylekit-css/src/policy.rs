//! Sanitizer limits and allow/deny lists.

/// Properties that bind scripts or behaviors to elements.
pub const DENIED_PROPERTIES: &[&str] = &[
    "behavior",
    "-ms-behavior",
    "-moz-binding",
    "-webkit-binding",
    "binding",
];

/// Fragments that make a declaration value executable in some engine.
pub const DENIED_VALUE_PATTERNS: &[&str] = &["expression(", "javascript:", "vbscript:"];

/// Schemes permitted inside `url()` and `@import` targets.
pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https"];

/// Resource bounds applied while lexing untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizerLimits {
    /// Input beyond this many bytes is cut off before lexing.
    pub max_input_bytes: usize,
    /// Maximum brace and paren nesting.
    pub max_depth: usize,
    /// Maximum number of rules, at-rules and declarations kept.
    pub max_items: usize,
}

impl Default for SanitizerLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            max_depth: 20,
            max_items: 5000,
        }
    }
}

/// Everything the sanitizer needs to decide what survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerPolicy {
    pub limits: SanitizerLimits,
    /// Lowercase scheme names allowed in URLs.
    pub allowed_url_schemes: Vec<String>,
    /// Lowercase property names that are always dropped.
    pub denied_properties: Vec<String>,
}

impl Default for SanitizerPolicy {
    fn default() -> Self {
        Self {
            limits: SanitizerLimits::default(),
            allowed_url_schemes: DEFAULT_URL_SCHEMES.iter().map(|s| s.to_string()).collect(),
            denied_properties: DENIED_PROPERTIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SanitizerPolicy {
    /// Add extra denied properties on top of the built-in list.
    pub fn with_denied_properties<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for prop in extra {
            let prop = prop.as_ref().trim().to_ascii_lowercase();
            if !prop.is_empty() && !self.denied_properties.contains(&prop) {
                self.denied_properties.push(prop);
            }
        }
        self
    }

    /// Replace the URL scheme allow-list.
    pub fn with_url_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_url_schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    pub fn with_limits(mut self, limits: SanitizerLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn is_denied_property(&self, property: &str) -> bool {
        self.denied_properties.iter().any(|p| p == property)
    }

    pub fn is_allowed_scheme(&self, scheme: &str) -> bool {
        self.allowed_url_schemes.iter().any(|s| s == scheme)
    }
}
