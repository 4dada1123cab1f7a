//! Tests for the full validation pipeline.

use super::*;

fn config() -> StylekitConfig {
    StylekitConfig::default()
}

#[test]
fn default_config_validates() {
    assert!(validate(&config()).is_ok());
}

#[test]
fn catches_max_depth_zero() {
    let mut config = config();
    config.sanitizer.max_depth = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sanitizer.max_depth"));
}

#[test]
fn catches_max_depth_too_large() {
    let mut config = config();
    config.sanitizer.max_depth = 65;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sanitizer.max_depth"));
}

#[test]
fn catches_max_items_out_of_range() {
    let mut config = config();
    config.sanitizer.max_items = 100_001;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sanitizer.max_items"));
}

#[test]
fn catches_tiny_input_limit() {
    let mut config = config();
    config.sanitizer.max_input_bytes = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sanitizer.max_input_bytes"));
}

#[test]
fn rejects_script_schemes() {
    for scheme in ["javascript", "VBScript", "data"] {
        let mut config = config();
        config.sanitizer.allowed_url_schemes = vec!["https".into(), scheme.into()];
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("can not be allowed"), "{scheme}: {err}");
    }
}

#[test]
fn rejects_malformed_scheme_names() {
    let mut config = config();
    config.sanitizer.allowed_url_schemes = vec!["https:".into(), "".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("not a valid scheme name").count(), 2);
}

#[test]
fn accepts_custom_scheme() {
    let mut config = config();
    config.sanitizer.allowed_url_schemes = vec!["https".into(), "ipfs".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn rejects_bad_denied_property() {
    let mut config = config();
    config.sanitizer.extra_denied_properties = vec!["position".into(), "a;b".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'a;b'"));
    assert!(!err.contains("'position'"));
}

#[test]
fn rejects_empty_option_keys() {
    let mut config = config();
    config.registry.tokens_option = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("registry.tokens_option must not be empty"));
}

#[test]
fn rejects_shared_option_key() {
    let mut config = config();
    config.registry.css_option = config.registry.tokens_option.clone();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must differ"));
}

#[test]
fn rejects_default_context_with_braces() {
    let mut config = config();
    config.registry.default_context = ":root { }".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("registry.default_context"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = config();
    config.sanitizer.max_depth = 0;
    config.sanitizer.max_items = 0;
    config.registry.default_context = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sanitizer.max_depth"));
    assert!(err.contains("sanitizer.max_items"));
    assert!(err.contains("registry.default_context"));
    assert_eq!(err.matches("; ").count(), 2);
}
