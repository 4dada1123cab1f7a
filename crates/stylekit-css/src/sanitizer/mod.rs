//! The full sanitizing pipeline: strip tags, lex, filter, serialize.

use tracing::debug;

use crate::document::{Document, Node};
use crate::filter::SecurityFilter;
use crate::lexer::{tokenize_with_limits, truncate_input};
use crate::policy::SanitizerPolicy;
use crate::serialize::serialize;
use crate::strip::strip_tags;

const WRAP_SELECTOR: &str = ":root";
const WRAP_PROPERTY: &str = "--value";

/// Sanitizer bound to a [`SanitizerPolicy`].
#[derive(Debug, Clone, Default)]
pub struct CssSanitizer {
    policy: SanitizerPolicy,
}

impl CssSanitizer {
    pub fn new(policy: SanitizerPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SanitizerPolicy {
        &self.policy
    }

    /// Strip, lex and filter `css` into a safe tree.
    pub fn parse(&self, css: &str) -> Document {
        let limits = &self.policy.limits;
        let text = strip_tags(truncate_input(css, limits.max_input_bytes));
        let doc = tokenize_with_limits(&text, limits);
        SecurityFilter::new(&self.policy).filter(doc)
    }

    /// Sanitize `css` into canonical text. Never fails; may return `""`.
    pub fn sanitize(&self, css: &str) -> String {
        serialize(&self.parse(css))
    }

    /// Sanitize a single custom-property value.
    ///
    /// Returns `None` when the value does not survive as exactly one
    /// non-empty value (it smuggles `;`/`}`, an unsafe URL, or markup only).
    pub fn sanitize_value(&self, value: &str) -> Option<String> {
        let wrapped = format!("{WRAP_SELECTOR} {{{WRAP_PROPERTY}:{value}}}");
        let doc = self.parse(&wrapped);

        let sanitized = match doc.nodes.as_slice() {
            [Node::Rule(rule)] if rule.selector == WRAP_SELECTOR => {
                match rule.declarations.as_slice() {
                    [decl] if decl.property == WRAP_PROPERTY && !decl.value.is_empty() => {
                        Some(decl.value.clone())
                    }
                    _ => None,
                }
            }
            _ => None,
        };

        if sanitized.is_none() {
            debug!(value, "custom property value rejected by sanitizer");
        }
        sanitized
    }
}

/// Sanitize `css` with the default policy.
pub fn sanitize(css: &str) -> String {
    CssSanitizer::default().sanitize(css)
}

#[cfg(test)]
mod tests;
