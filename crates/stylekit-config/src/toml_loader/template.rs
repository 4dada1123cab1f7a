//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Stylekit Configuration
# Only override what you want to change -- missing fields use defaults.

[sanitizer]
# max_input_bytes = 1048576   # 1024-16777216, longer input is truncated
# max_depth = 20              # 1-64, brace and paren nesting
# max_items = 5000            # 1-100000, rules + at-rules + declarations
# allowed_url_schemes = ["http", "https"]
# extra_denied_properties = []

[registry]
# tokens_option = "stylekit_tokens_registry"
# css_option = "stylekit_tokens_css"
# default_context = ":root"

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
}
