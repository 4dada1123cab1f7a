//! Sanitizer section validation (limits, URL schemes, deny-list extras).

use crate::schema::StylekitConfig;

use super::helpers::validate_range;

/// Schemes that can never be allow-listed.
const FORBIDDEN_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

pub(crate) fn validate_limits(errors: &mut Vec<String>, config: &StylekitConfig) {
    let s = &config.sanitizer;
    validate_range(errors, "sanitizer.max_input_bytes", s.max_input_bytes, 1024, 16 * 1024 * 1024);
    validate_range(errors, "sanitizer.max_depth", s.max_depth, 1, 64);
    validate_range(errors, "sanitizer.max_items", s.max_items, 1, 100_000);
}

pub(crate) fn validate_url_schemes(errors: &mut Vec<String>, config: &StylekitConfig) {
    for scheme in &config.sanitizer.allowed_url_schemes {
        let lower = scheme.trim().to_ascii_lowercase();
        if lower.is_empty() || !lower.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(format!(
                "sanitizer.allowed_url_schemes: '{scheme}' is not a valid scheme name"
            ));
        } else if FORBIDDEN_SCHEMES.contains(&lower.as_str()) {
            errors.push(format!(
                "sanitizer.allowed_url_schemes: '{scheme}' can not be allowed"
            ));
        }
    }
}

pub(crate) fn validate_denied_properties(errors: &mut Vec<String>, config: &StylekitConfig) {
    for prop in &config.sanitizer.extra_denied_properties {
        let valid = !prop.trim().is_empty()
            && prop
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            errors.push(format!(
                "sanitizer.extra_denied_properties: '{prop}' is not a property name"
            ));
        }
    }
}
