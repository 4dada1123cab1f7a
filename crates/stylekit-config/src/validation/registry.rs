//! Registry section validation (option keys, default context).

use crate::schema::StylekitConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_registry(errors: &mut Vec<String>, config: &StylekitConfig) {
    let r = &config.registry;
    validate_non_empty(errors, "registry.tokens_option", &r.tokens_option);
    validate_non_empty(errors, "registry.css_option", &r.css_option);
    validate_non_empty(errors, "registry.default_context", &r.default_context);

    if r.tokens_option.trim() == r.css_option.trim() && !r.tokens_option.trim().is_empty() {
        errors.push("registry.tokens_option and registry.css_option must differ".into());
    }

    if r.default_context.contains(['{', '}', ';']) {
        errors.push(format!(
            "registry.default_context = '{}' must not contain braces or semicolons",
            r.default_context
        ));
    }
}
